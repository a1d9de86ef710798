// ── HTTP-backed store ──

use custbook_api::{CustomerClient, CustomerRecord};
use tracing::{debug, info};

use super::CustomerStore;
use crate::config::StoreConfig;
use crate::error::CoreError;
use crate::model::{Customer, CustomerId};

/// [`CustomerStore`] over the customer REST API.
pub struct RemoteStore {
    client: CustomerClient,
}

impl RemoteStore {
    /// Build the HTTP client from connection settings.
    pub fn connect(config: &StoreConfig) -> Result<Self, CoreError> {
        let client = CustomerClient::new(config.api_url.as_str(), &config.transport())?;
        debug!(api_url = %client.base_url(), "customer store ready");
        Ok(Self { client })
    }

    pub fn api_url(&self) -> &url::Url {
        self.client.base_url()
    }
}

impl CustomerStore for RemoteStore {
    async fn list(&self) -> Result<Vec<Customer>, CoreError> {
        let records = self.client.list_customers().await?;
        debug!(count = records.len(), "listed customers");
        Ok(records.into_iter().map(Customer::from).collect())
    }

    async fn get(&self, id: &CustomerId) -> Result<Customer, CoreError> {
        match self.client.get_customer(id.as_str()).await {
            Ok(record) => Ok(Customer::from(record)),
            Err(e) if e.is_not_found() => Err(CoreError::NotFound {
                identifier: id.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn create(&self, draft: &Customer) -> Result<Customer, CoreError> {
        let mut body = CustomerRecord::from(draft);
        body.id = None;

        let created = Customer::from(self.client.create_customer(&body).await?);
        let id = created.require_id()?;
        info!(%id, "created customer");
        Ok(created)
    }

    async fn update(
        &self,
        id: &CustomerId,
        customer: &Customer,
    ) -> Result<Option<Customer>, CoreError> {
        let body = CustomerRecord::from(customer);
        let echo = match self.client.update_customer(id.as_str(), &body).await {
            Ok(echo) => echo,
            Err(e) if e.is_not_found() => {
                return Err(CoreError::NotFound {
                    identifier: id.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        info!(%id, addresses = customer.addresses.len(), "updated customer");
        Ok(echo.map(Customer::from))
    }

    async fn delete(&self, id: &CustomerId) -> Result<(), CoreError> {
        match self.client.delete_customer(id.as_str()).await {
            Ok(()) => {
                info!(%id, "deleted customer");
                Ok(())
            }
            Err(e) if e.is_not_found() => Err(CoreError::NotFound {
                identifier: id.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}
