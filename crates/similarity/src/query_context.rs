//! Build a QueryContext from the catalog.

use crate::types::QueryContext;
use catalog::{Catalog, UnknownPlayerError};

/// Resolve the query player through the name index and capture the
/// attributes the filters compare against.
pub fn build_query_context(
    catalog: &Catalog,
    key: &str,
) -> Result<QueryContext, UnknownPlayerError> {
    let row = catalog.lookup(key)?;
    let player = catalog
        .get_player(row)
        .ok_or_else(|| UnknownPlayerError::new(key))?;

    let mut context = QueryContext::new(key, row, catalog.population());
    context.position = player.position.clone();
    context.foot = player.foot;
    Ok(context)
}
