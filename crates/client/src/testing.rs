//! Test doubles: a scripted, recording transport and sample records.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::rc::Rc;

use chrono::{NaiveDate, TimeZone, Utc};
use rntly_domain::id::{LeaseId, PropertyId, TenantId};
use rntly_domain::property::PropertyKind;
use rntly_domain::tenant::Tenant;

use crate::error::ClientError;
use crate::record::{LeaseRecord, PropertyRecord};
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Replays queued responses in order and records every request.
///
/// When the queue is empty it answers `200 []`. Clones share state.
#[derive(Clone, Default)]
pub struct FakeTransport {
    requests: Rc<RefCell<Vec<ApiRequest>>>,
    responses: Rc<RefCell<VecDeque<Result<ApiResponse, ClientError>>>>,
}

impl FakeTransport {
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.into(),
        }));
        self
    }

    pub fn respond_json(&self, status: u16, body: &serde_json::Value) -> &Self {
        self.respond(status, body.to_string())
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Err(ClientError::Network(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ClientError>> {
        self.requests.borrow_mut().push(request);
        let next = self.responses.borrow_mut().pop_front();
        async move {
            next.unwrap_or_else(|| {
                Ok(ApiResponse {
                    status: 200,
                    body: "[]".to_string(),
                })
            })
        }
    }
}

/// Records the request, then never answers.
#[derive(Clone, Default)]
pub struct HangingTransport {
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl HangingTransport {
    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for HangingTransport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ClientError>> {
        self.requests.borrow_mut().push(request);
        std::future::pending()
    }
}

fn timestamp() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

pub fn sample_property(id: &str, address: &str) -> PropertyRecord {
    PropertyRecord {
        id: PropertyId::from(id),
        address: address.to_string(),
        kind: PropertyKind::House,
        bedrooms: 3,
        rent_amount: 1500.0,
        status: "vacant".to_string(),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn sample_tenant(id: &str) -> Tenant {
    Tenant {
        id: TenantId::from(id),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555-0100".to_string(),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn sample_lease(id: &str, property_id: &str, tenant_id: &str) -> LeaseRecord {
    LeaseRecord {
        id: LeaseId::from(id),
        property_id: PropertyId::from(property_id),
        tenant_id: TenantId::from(tenant_id),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        rent_amount: 1500.0,
        deposit: 3000.0,
        status: "active".to_string(),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}
