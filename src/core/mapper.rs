use crate::domain::model::{CustomFields, InputRow, OutputRecord, Personal};

pub const ACCOUNT_DOMAIN: &str = "umass.edu";
pub const DEFAULT_EXPIRATION_DATE: &str = "2023-07-31";
// Every special-programs patron loads as an undergraduate for now.
pub const PATRON_GROUP: &str = "Undergraduate";
pub const PREFERRED_CONTACT_TYPE: &str = "Email";
pub const INSTITUTION: &str = "UMass Amherst";
pub const USER_TYPE: &str = "Special Programs";

/// Maps patron export rows onto the bulk-load record shape.
///
/// Mapping is total: optional columns that are absent fall back to their
/// defaults and nothing here reads the clock or the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordMapper;

impl RecordMapper {
    pub fn new() -> Self {
        Self
    }

    /// `<ID>@umass.edu`, used for both the username and the external id.
    pub fn account_tag(id: &str) -> String {
        format!("{}@{}", id, ACCOUNT_DOMAIN)
    }

    pub fn map(&self, row: InputRow) -> OutputRecord {
        let account_tag = Self::account_tag(&row.id);

        // An empty address is still an address; only a missing one falls back.
        let email = row.email_address.unwrap_or_else(|| account_tag.clone());
        let expiration_date = row
            .expiration_date
            .unwrap_or_else(|| DEFAULT_EXPIRATION_DATE.to_string());

        OutputRecord {
            username: account_tag.clone(),
            external_system_id: account_tag,
            barcode: row.barcode,
            active: true,
            patron_group: PATRON_GROUP.to_string(),
            departments: Vec::new(),
            personal: Personal {
                last_name: row.last_name,
                first_name: row.first_name,
                middle_name: String::new(),
                email,
                phone: String::new(),
                preferred_contact_type_id: PREFERRED_CONTACT_TYPE.to_string(),
            },
            expiration_date,
            custom_fields: CustomFields {
                institution: INSTITUTION.to_string(),
                user_type: USER_TYPE.to_string(),
            },
        }
    }
}
