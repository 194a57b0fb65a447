//! Resource descriptors.
//!
//! A [`Resource`] names everything a list-and-form screen needs to know
//! about one record type: where it lives on the API, how to label it, the
//! payload types, and how a record turns into table cells. The three screens
//! are a single generic view instantiated with [`Properties`], [`Tenants`]
//! and [`Leases`].

use std::fmt::Debug;

use rntly_domain::lease::{LeaseCreate, LeaseUpdate};
use rntly_domain::property::{PropertyCreate, PropertyUpdate};
use rntly_domain::tenant::{Tenant, TenantCreate, TenantUpdate};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::record::{LeaseRecord, PropertyRecord};

/// Colour hint for a badge cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Success,
    Warning,
}

impl Tone {
    /// CSS class used by the dashboard.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Neutral => "badge",
            Self::Success => "badge badge-green",
            Self::Warning => "badge badge-yellow",
        }
    }
}

/// One rendered table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Badge { text: String, tone: Tone },
}

impl Cell {
    /// The cell's visible text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Badge { text, .. } => text,
        }
    }
}

/// Describes one REST resource and how it is shown.
pub trait Resource: Debug + Clone + PartialEq + Send + Sync + 'static {
    type Record: DeserializeOwned + Debug + Clone + PartialEq + Send + Sync + 'static;
    type Create: Serialize + Default + Debug + Clone + PartialEq + Send + Sync + 'static;
    type Update: Serialize + Debug + Clone + PartialEq + Send + Sync + 'static;

    /// Collection path below the API base, e.g. `/properties`.
    const PATH: &'static str;
    /// Lowercase singular used in messages, e.g. `property`.
    const SINGULAR: &'static str;
    /// Lowercase plural used in messages, e.g. `properties`.
    const PLURAL: &'static str;
    /// Page heading.
    const TITLE: &'static str;
    /// Capitalised singular used on the "Add ..." button.
    const LABEL: &'static str;
    /// Text shown when the collection is empty.
    const EMPTY_TEXT: &'static str;
    /// Table headers, excluding the trailing actions column.
    const COLUMNS: &'static [&'static str];

    fn id(record: &Self::Record) -> &str;

    /// Render a record as one table row, in [`Self::COLUMNS`] order.
    fn cells(record: &Self::Record) -> Vec<Cell>;
}

fn money(amount: f64) -> String {
    format!("${amount}")
}

/// The `/properties` resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Properties;

impl Resource for Properties {
    type Record = PropertyRecord;
    type Create = PropertyCreate;
    type Update = PropertyUpdate;

    const PATH: &'static str = "/properties";
    const SINGULAR: &'static str = "property";
    const PLURAL: &'static str = "properties";
    const TITLE: &'static str = "Properties";
    const LABEL: &'static str = "Property";
    const EMPTY_TEXT: &'static str = "No properties yet.";
    const COLUMNS: &'static [&'static str] = &["Address", "Type", "Bedrooms", "Rent", "Status"];

    fn id(record: &PropertyRecord) -> &str {
        record.id.as_str()
    }

    /// The status badge is green for `vacant` and yellow for anything else.
    fn cells(record: &PropertyRecord) -> Vec<Cell> {
        let tone = if record.is_vacant() {
            Tone::Success
        } else {
            Tone::Warning
        };
        vec![
            Cell::Text(record.address.clone()),
            Cell::Text(record.kind.to_string()),
            Cell::Text(record.bedrooms.to_string()),
            Cell::Text(money(record.rent_amount)),
            Cell::Badge {
                text: record.status.clone(),
                tone,
            },
        ]
    }
}

/// The `/tenants` resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tenants;

impl Resource for Tenants {
    type Record = Tenant;
    type Create = TenantCreate;
    type Update = TenantUpdate;

    const PATH: &'static str = "/tenants";
    const SINGULAR: &'static str = "tenant";
    const PLURAL: &'static str = "tenants";
    const TITLE: &'static str = "Tenants";
    const LABEL: &'static str = "Tenant";
    const EMPTY_TEXT: &'static str = "No tenants yet.";
    const COLUMNS: &'static [&'static str] = &["Name", "Email", "Phone"];

    fn id(record: &Tenant) -> &str {
        record.id.as_str()
    }

    fn cells(record: &Tenant) -> Vec<Cell> {
        vec![
            Cell::Text(record.full_name()),
            Cell::Text(record.email.clone()),
            Cell::Text(record.phone.clone()),
        ]
    }
}

/// The `/leases` resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Leases;

impl Resource for Leases {
    type Record = LeaseRecord;
    type Create = LeaseCreate;
    type Update = LeaseUpdate;

    const PATH: &'static str = "/leases";
    const SINGULAR: &'static str = "lease";
    const PLURAL: &'static str = "leases";
    const TITLE: &'static str = "Leases";
    const LABEL: &'static str = "Lease";
    const EMPTY_TEXT: &'static str = "No leases yet.";
    const COLUMNS: &'static [&'static str] = &[
        "Property", "Tenant", "Start", "End", "Rent", "Deposit", "Status",
    ];

    fn id(record: &LeaseRecord) -> &str {
        record.id.as_str()
    }

    fn cells(record: &LeaseRecord) -> Vec<Cell> {
        vec![
            Cell::Text(record.property_id.to_string()),
            Cell::Text(record.tenant_id.to_string()),
            Cell::Text(record.start_date.to_string()),
            Cell::Text(record.end_date.to_string()),
            Cell::Text(money(record.rent_amount)),
            Cell::Text(money(record.deposit)),
            Cell::Badge {
                text: record.status.clone(),
                tone: Tone::Neutral,
            },
        ]
    }
}
