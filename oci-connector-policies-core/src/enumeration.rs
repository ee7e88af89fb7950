//! Compartment enumeration across the whole tenancy.

use crate::clients::{Compartment, IdentityApi};
use crate::oci::{OciError, OciResult};

/// Every compartment in the tenancy, in the provider's pagination order.
///
/// This is the one stage that propagates provider errors: without
/// compartments there is nothing to scan.
pub async fn list_all_compartments(
    identity: &dyn IdentityApi,
    tenancy_id: &str,
) -> OciResult<Vec<Compartment>> {
    if tenancy_id.is_empty() {
        return Err(OciError::ConfigError(
            "tenancy id must not be empty".to_string(),
        ));
    }

    let mut compartments = Vec::new();
    let mut page: Option<String> = None;
    loop {
        let batch = identity
            .list_compartments(tenancy_id, page.as_deref())
            .await?;
        compartments.extend(batch.items);
        match batch.next_page {
            Some(token) => page = Some(token),
            None => break,
        }
    }
    Ok(compartments)
}
