// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token registration service
//!
//! The operations an HTTP CRUD layer calls: register, refresh, brand, update,
//! delete, get and list. Metadata resolution is best effort: a failed fetch is
//! reported as a warning and never blocks persisting the record.

use tracing::{info, warn, Instrument};

use super::branding::BrandingPreset;
use super::record::{NewTokenRecord, NewTokenRequest, Registration, TokenRecord, TokenUpdate};
use super::store::TokenStore;
use crate::errors::{ResolveError, StorageError, SupplyscanError};
use crate::metadata::{SharedResolver, TokenMetadata};
use crate::provider::{EndpointConnector, HttpConnector};
use crate::spans;
use crate::validation::parse_token_address;

/// Registers token contracts and keeps their metadata current.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use supplyscan::{MemoryTokenStore, MetadataResolver, NewTokenRequest, ResolverConfig, TokenRegistrar};
///
/// let resolver = Arc::new(MetadataResolver::new(ResolverConfig::from_env()?));
/// let registrar = TokenRegistrar::new(MemoryTokenStore::new(), resolver);
///
/// let registration = registrar
///     .register(NewTokenRequest::new("0xdAC17F958D2ee523a2206206994597C13D831ec7", "eth").fetch_onchain())
///     .await?;
/// for warning in &registration.warnings {
///     eprintln!("warning: {warning}");
/// }
/// ```
pub struct TokenRegistrar<S, C = HttpConnector> {
    store: S,
    resolver: SharedResolver<C>,
    branding: BrandingPreset,
}

impl<S: TokenStore, C: EndpointConnector> TokenRegistrar<S, C> {
    /// Create a registrar using the MEDIAXR branding preset.
    pub fn new(store: S, resolver: SharedResolver<C>) -> Self {
        Self {
            store,
            resolver,
            branding: BrandingPreset::mediaxr(),
        }
    }

    /// Use a different branding preset.
    #[must_use]
    pub fn with_branding(mut self, branding: BrandingPreset) -> Self {
        self.branding = branding;
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a token.
    ///
    /// When the request asks for it, metadata is resolved on-chain first; an
    /// empty supply figure is then filled from the fetched total supply. The
    /// branding preset, when requested, is applied last and wins over fetched
    /// values.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidAddress`] for a malformed address
    /// - [`ResolveError::UnknownChain`] for an empty chain key
    /// - [`StorageError::Conflict`] if the token is already registered on the chain
    pub async fn register(&self, request: NewTokenRequest) -> Result<Registration, SupplyscanError> {
        let span = spans::register_token(&request.chain_key, &request.address);
        self.create_record(request).instrument(span).await
    }

    /// Resolve metadata again and merge it onto the stored record.
    ///
    /// Only populated fields of the fresh result overwrite stored ones. If
    /// resolution fails the record is returned unchanged with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] for an unknown id.
    pub async fn refresh(&self, id: u64) -> Result<Registration, SupplyscanError> {
        self.refresh_record(id)
            .instrument(spans::refresh_token(id))
            .await
    }

    /// Overlay the branding preset on a stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] for an unknown id.
    pub async fn apply_branding(&self, id: u64) -> Result<TokenRecord, SupplyscanError> {
        let mut record = self.get(id).await?;
        let mut metadata = record.metadata.take().unwrap_or_default();
        self.branding.apply(&mut metadata);
        record.metadata = Some(metadata);
        Ok(self.store.update(record).await?)
    }

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// - [`StorageError::NotFound`] for an unknown id
    /// - [`ResolveError::InvalidAddress`] for a malformed new address
    /// - [`StorageError::Conflict`] if the update collides with another record
    pub async fn update(&self, id: u64, update: TokenUpdate) -> Result<TokenRecord, SupplyscanError> {
        let mut record = self.get(id).await?;

        if let Some(address) = update.address {
            record.address = parse_token_address(&address)?;
        }
        if let Some(chain_key) = non_empty(update.chain_key) {
            record.chain_key = chain_key;
        }
        if let Some(chain_name) = update.chain_name {
            record.chain_name = chain_name;
        }
        if let Some(supply_input) = update.supply_input {
            record.supply_input = Some(supply_input);
        }
        if let Some(metadata) = update.metadata {
            record.metadata = Some(metadata);
        }

        Ok(self.store.update(record).await?)
    }

    /// Delete a record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] for an unknown id.
    pub async fn delete(&self, id: u64) -> Result<(), SupplyscanError> {
        self.store.delete(id).await?;
        info!(id, "Deleted token");
        Ok(())
    }

    /// Fetch one record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] for an unknown id.
    pub async fn get(&self, id: u64) -> Result<TokenRecord, SupplyscanError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| StorageError::NotFound { id }.into())
    }

    /// Every record, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store is unavailable.
    pub async fn list(&self) -> Result<Vec<TokenRecord>, SupplyscanError> {
        Ok(self.store.list_all().await?)
    }

    async fn create_record(&self, request: NewTokenRequest) -> Result<Registration, SupplyscanError> {
        let address = parse_token_address(&request.address)?;
        let chain_key = request.chain_key.trim().to_string();
        if chain_key.is_empty() {
            return Err(ResolveError::unknown_chain(chain_key).into());
        }

        let chain_name = non_empty(request.chain_name).unwrap_or_else(|| {
            self.resolver.registry().display_name(&chain_key).to_string()
        });
        let mut supply_input = non_empty(request.supply_input);
        let mut metadata = None;
        let mut warnings = Vec::new();

        if request.fetch_onchain {
            match self.fetch(address, &chain_key).await {
                Ok(fetched) => {
                    if supply_input.is_none() {
                        supply_input = fetched.total_supply.clone();
                    }
                    metadata = Some(fetched);
                }
                Err(warning) => warnings.push(warning),
            }
        }

        if request.apply_branding {
            let mut branded = metadata.unwrap_or_default();
            self.branding.apply(&mut branded);
            metadata = Some(branded);
        }

        let record = self
            .store
            .create(NewTokenRecord {
                address,
                chain_key,
                chain_name,
                supply_input,
                metadata,
            })
            .await?;

        info!(id = record.id, warnings = warnings.len(), "Registered token");
        Ok(Registration { record, warnings })
    }

    async fn refresh_record(&self, id: u64) -> Result<Registration, SupplyscanError> {
        let mut record = self.get(id).await?;

        match self.fetch(record.address, &record.chain_key).await {
            Ok(fetched) => {
                let mut merged = record.metadata.take().unwrap_or_default();
                merged.merge(fetched);
                record.metadata = Some(merged);
                let record = self.store.update(record).await?;
                info!("Refreshed token metadata");
                Ok(Registration {
                    record,
                    warnings: Vec::new(),
                })
            }
            Err(warning) => Ok(Registration {
                record,
                warnings: vec![warning],
            }),
        }
    }

    /// Resolve metadata, turning failure into a warning message.
    async fn fetch(
        &self,
        address: alloy_primitives::Address,
        chain_key: &str,
    ) -> Result<TokenMetadata, String> {
        self.resolver
            .resolve(address, chain_key, &self.resolver.config().overrides)
            .await
            .map_err(|error| {
                warn!(chain_key, error = %error, "On-chain metadata fetch failed");
                format!("on-chain metadata fetch failed: {error}")
            })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
