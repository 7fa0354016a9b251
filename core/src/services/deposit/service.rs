//! Main deposit order service implementation

use std::sync::Arc;

use futures_util::future::try_join_all;
use re_shared::validation::mask_email;
use re_shared::Pagination;
use uuid::Uuid;

use crate::domain::entities::{DepositOrder, Role};
use crate::domain::value_objects::{ContactDetails, DepositOrderDetails, StaffDepositOrder};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{DepositOrderRepository, ProfileRepository, PropertyRepository};
use crate::services::authorization::AuthorizationGate;

/// Service booking and listing customer deposit orders
pub struct DepositOrderService {
    orders: Arc<dyn DepositOrderRepository>,
    properties: Arc<dyn PropertyRepository>,
    profiles: Arc<dyn ProfileRepository>,
    gate: AuthorizationGate,
    /// Staff listings only show orders strictly below this amount
    threshold: i64,
}

impl DepositOrderService {
    pub fn new(
        orders: Arc<dyn DepositOrderRepository>,
        properties: Arc<dyn PropertyRepository>,
        profiles: Arc<dyn ProfileRepository>,
        gate: AuthorizationGate,
        threshold: i64,
    ) -> Self {
        Self {
            orders,
            properties,
            profiles,
            gate,
            threshold,
        }
    }

    /// Book a pending deposit on a property for the calling customer
    ///
    /// # Errors
    ///
    /// * `Auth(..)` - caller unknown, inactive or not a customer
    /// * `ValidationErr(..)` - malformed property id or non-positive amount
    /// * `NotFound` - property does not exist
    pub async fn create(
        &self,
        caller_email: &str,
        property_id: &str,
        deposit_amount: i64,
    ) -> DomainResult<DepositOrder> {
        let caller = self.gate.require(caller_email, &[Role::Customer]).await?;

        if deposit_amount <= 0 {
            return Err(ValidationError::OutOfRange {
                field: "depositAmount".to_string(),
                constraint: "must be greater than zero".to_string(),
            }
            .into());
        }
        let property_id =
            Uuid::parse_str(property_id.trim()).map_err(|_| ValidationError::InvalidFormat {
                field: "propertyId".to_string(),
            })?;

        if self.properties.find_by_id(property_id).await?.is_none() {
            return Err(DomainError::NotFound {
                resource: "Property".to_string(),
            });
        }

        let order = self
            .orders
            .create(DepositOrder::new(caller.id, property_id, deposit_amount))
            .await?;

        tracing::info!(
            order_id = %order.id,
            property_id = %property_id,
            customer = %mask_email(&caller.email),
            "Deposit order booked"
        );
        Ok(order)
    }

    /// Orders below the configured threshold, largest deposit first, each
    /// with the booking customer's contact (staff only)
    pub async fn list_filtered(
        &self,
        caller_email: &str,
        pagination: Pagination,
    ) -> DomainResult<Vec<StaffDepositOrder>> {
        self.gate
            .require(caller_email, &[Role::Manager, Role::Employee])
            .await?;
        let orders = self
            .orders
            .find_below_amount(self.threshold, pagination)
            .await?;

        try_join_all(orders.into_iter().map(|order| self.with_customer(order))).await
    }

    /// The calling customer's orders, oldest first, each with its property
    /// and the listing owner's contact resolved
    pub async fn list_owned_by(
        &self,
        caller_email: &str,
        pagination: Pagination,
    ) -> DomainResult<Vec<DepositOrderDetails>> {
        let caller = self.gate.require(caller_email, &[Role::Customer]).await?;
        let orders = self.orders.find_by_customer(caller.id, pagination).await?;

        try_join_all(orders.into_iter().map(|order| self.enrich(order))).await
    }

    async fn with_customer(&self, order: DepositOrder) -> DomainResult<StaffDepositOrder> {
        let customer = self
            .profiles
            .find_by_account(order.customer_id)
            .await?
            .as_ref()
            .map(ContactDetails::from);

        Ok(StaffDepositOrder { order, customer })
    }

    async fn enrich(&self, order: DepositOrder) -> DomainResult<DepositOrderDetails> {
        let property = self.properties.find_by_id(order.property_id).await?;

        let owner = match &property {
            Some(property) => self
                .profiles
                .find_by_account(property.owner_id)
                .await?
                .as_ref()
                .map(ContactDetails::from),
            None => {
                tracing::debug!(order_id = %order.id, "Order references a missing property");
                None
            }
        };

        Ok(DepositOrderDetails {
            order,
            property,
            owner,
        })
    }
}
