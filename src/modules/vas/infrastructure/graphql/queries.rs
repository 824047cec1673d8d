//! GraphQL documents used by the VAS page

/// Paged, filtered, sorted VAS list
pub const VAS_LIST_QUERY: &str = r#"
query ($filters: [Filter], $pagination: Pagination, $sortings: [Sorting]) {
  vass(filters: $filters, pagination: $pagination, sortings: $sortings) {
    items {
      id
      name
      description
      defaultPrice
      currency
      uom
      operationGuideType
      operationGuide
      updatedAt
      updater {
        name
        description
      }
    }
    total
  }
}
"#;

/// Bulk create/update keyed by id
pub const UPDATE_MULTIPLE_VAS_MUTATION: &str = r#"
mutation ($patches: [VasPatch]!) {
  updateMultipleVas(patches: $patches) {
    name
  }
}
"#;

/// Bulk delete by id list
pub const DELETE_VASS_MUTATION: &str = r#"
mutation ($ids: [String]!) {
  deleteVass(ids: $ids)
}
"#;

/// Entries of one code table
pub const COMMON_CODE_QUERY: &str = r#"
query ($name: String!) {
  commonCode(name: $name) {
    details {
      name
      description
    }
  }
}
"#;
