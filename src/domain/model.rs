use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Columns that must appear in the patron file header.
pub const REQUIRED_COLUMNS: [&str; 4] = ["ID", "Barcode", "Last_Name", "First_Name"];

/// One decoded row of the patron export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Barcode")]
    pub barcode: String,
    #[serde(rename = "Last_Name")]
    pub last_name: String,
    #[serde(rename = "First_Name")]
    pub first_name: String,
    #[serde(rename = "Email_Address", default)]
    pub email_address: Option<String>,
    #[serde(rename = "Expiration_Date", default)]
    pub expiration_date: Option<String>,
}

/// A patron record in the bulk-load shape. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub username: String,
    pub external_system_id: String,
    pub barcode: String,
    pub active: bool,
    pub patron_group: String,
    pub departments: Vec<String>,
    pub personal: Personal,
    pub expiration_date: String,
    pub custom_fields: CustomFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_contact_type_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFields {
    pub institution: String,
    #[serde(rename = "user type")]
    pub user_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub records_written: usize,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_read: usize,
    pub records_written: usize,
    pub output_path: PathBuf,
}
