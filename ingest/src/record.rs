//! The input row.

use serde::Deserialize;

/// One laureate row of the input table.
///
/// Every field is text; empty cells deserialize to empty strings. Columns not
/// listed here are ignored, and a listed column missing from the header is an
/// input error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LaureateRecord {
    /// Display name; also the source of the subject's local name.
    #[serde(rename = "Full_Name")]
    pub full_name: String,
    /// Prize category key (`chemistry`, `economics`, ...).
    #[serde(rename = "Category")]
    pub category: String,
    /// Birth country as written in the source data.
    #[serde(rename = "Birth_Country")]
    pub birth_country: String,
    /// `Male`, or anything else for female.
    #[serde(rename = "Gender")]
    pub gender: String,
    /// Birth city; only tested for presence.
    #[serde(rename = "Birth_City")]
    pub birth_city: String,
    /// DBpedia local name of the birth city.
    #[serde(rename = "Birth_City_dbr")]
    pub birth_city_dbr: String,
    /// Organization name; only tested for presence.
    #[serde(rename = "Organization_Name")]
    pub organization_name: String,
    /// DBpedia local name of the organization.
    #[serde(rename = "Organization_Name_dbr")]
    pub organization_name_dbr: String,
    /// DBpedia local name of the laureate.
    #[serde(rename = "Full_Name_dbr")]
    pub full_name_dbr: String,
    /// Prize year.
    #[serde(rename = "Year")]
    pub year: String,
    /// Laureate identifier.
    #[serde(rename = "Laureate_Id")]
    pub laureate_id: String,
    /// Prize share.
    #[serde(rename = "Prize_Share")]
    pub prize_share: String,
    /// Prize motivation.
    #[serde(rename = "Motivation")]
    pub motivation: String,
    /// Birth date (`YYYY-MM-DD`).
    #[serde(rename = "Birth_Date")]
    pub birth_date: String,
    /// Given name.
    #[serde(rename = "Firstname")]
    pub firstname: String,
    /// Family name.
    #[serde(rename = "Lastname")]
    pub lastname: String,
    /// Birth country code.
    #[serde(rename = "Birth_Country_Code")]
    pub birth_country_code: String,
}
