fn main() {
    leptos::mount::mount_to_body(rntly_dashboard::App);
}
