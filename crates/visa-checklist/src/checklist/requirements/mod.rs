//! Read-only requirement table: consulate- and identity-specific wording and amounts.
//!
//! Every field defaults when absent, so a partial JSON file still loads and generators
//! see empty lists or strings instead of errors.

mod standard;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{ConsulateCode, HukouType, IdentityKind, VisaDuration, BEIJING};

/// Failure loading a requirement table from disk or text.
#[derive(Debug, thiserror::Error)]
pub enum RequirementTableError {
    #[error("unable to read requirement table: {0}")]
    Io(#[from] std::io::Error),
    #[error("requirement table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequirementTable {
    pub basic_materials: BasicMaterialsTable,
    pub identity_materials: BTreeMap<String, Vec<String>>,
    pub process_methods: ProcessMethods,
    pub visa_requirements: VisaRequirements,
    pub economic_materials: EconomicMaterialsTable,
    pub residence_materials: ResidenceMaterialsTable,
    pub risk_assessment: RiskGuide,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicMaterialsTable {
    pub all: Vec<String>,
    pub details: HukouDetails,
}

/// Clause spliced into the household-register item, per register type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HukouDetails {
    pub family: String,
    pub collective: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessMethods {
    #[serde(rename = "TAX")]
    pub tax: TaxMethod,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxMethod {
    /// Keyed by lower-case consulate code.
    pub requirements: BTreeMap<String, DurationTable<AmountRequirement>>,
}

/// One entry per visa duration, as keyed in the JSON (`SINGLE`, `THREE`, `FIVE`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationTable<T> {
    #[serde(rename = "SINGLE")]
    pub single: T,
    #[serde(rename = "THREE")]
    pub three: T,
    #[serde(rename = "FIVE")]
    pub five: T,
}

impl<T: Default> Default for DurationTable<T> {
    fn default() -> Self {
        Self {
            single: T::default(),
            three: T::default(),
            five: T::default(),
        }
    }
}

impl<T> DurationTable<T> {
    pub fn get(&self, duration: VisaDuration) -> &T {
        match duration {
            VisaDuration::Single => &self.single,
            VisaDuration::Three => &self.three,
            VisaDuration::Five => &self.five,
        }
    }
}

/// Amount in base currency units plus optional display wording.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmountRequirement {
    pub amount: f64,
    pub description: String,
}

impl AmountRequirement {
    pub fn is_configured(&self) -> bool {
        self.amount > 0.0 || !self.description.is_empty()
    }

    /// Amount expressed in 万 (ten-thousands); plain division, no rounding.
    pub fn amount_in_wan(&self) -> f64 {
        self.amount / 10_000.0
    }
}

pub type VisaRequirements = DurationTable<VisaRequirement>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisaRequirement {
    pub bank_balance: Option<AmountRequirement>,
    pub tax_amount: Option<AmountRequirement>,
    pub education: EducationTexts,
    pub simplified: SimplifiedRequirement,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationTexts {
    pub graduate: Option<String>,
    pub student: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifiedRequirement {
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EconomicMaterialsTable {
    pub bank_statement: BankStatement,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BankStatement {
    pub supported_banks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResidenceMaterialsTable {
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RiskGuide {
    pub high_risk_groups: Vec<String>,
    pub tax_verification: String,
    pub frequent_job_change: String,
}

impl RequirementTable {
    /// Built-in table used when no JSON file is configured.
    pub fn standard() -> Self {
        standard::standard_table()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RequirementTableError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RequirementTableError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, RequirementTableError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn basic_baseline(&self) -> Vec<String> {
        self.basic_materials.all.clone()
    }

    /// Register clause for the given type, `None` when unconfigured.
    pub fn hukou_clause(&self, hukou_type: HukouType) -> Option<&str> {
        let clause = match hukou_type {
            HukouType::Family => &self.basic_materials.details.family,
            HukouType::Collective => &self.basic_materials.details.collective,
        };
        (!clause.is_empty()).then_some(clause.as_str())
    }

    pub fn identity_materials(&self, identity: IdentityKind) -> Vec<String> {
        self.identity_materials
            .get(identity.code())
            .cloned()
            .unwrap_or_default()
    }

    /// Tax-process entry for a consulate, falling back to the beijing entry.
    pub fn tax_requirement(
        &self,
        consulate: Option<&ConsulateCode>,
        duration: VisaDuration,
    ) -> Option<&AmountRequirement> {
        let requirements = &self.process_methods.tax.requirements;
        consulate
            .and_then(|code| requirements.get(code.as_str()))
            .or_else(|| requirements.get(BEIJING))
            .map(|by_duration| by_duration.get(duration))
    }

    pub fn visa_requirement(&self, duration: VisaDuration) -> &VisaRequirement {
        self.visa_requirements.get(duration)
    }

    pub fn supported_banks(&self) -> Vec<String> {
        self.economic_materials.bank_statement.supported_banks.clone()
    }

    pub fn residence_options(&self) -> Vec<String> {
        self.residence_materials.options.clone()
    }

    pub fn simplified_requirements(&self) -> Vec<String> {
        self.visa_requirements
            .three
            .simplified
            .requirements
            .clone()
    }

    pub fn risk_guide(&self) -> RiskGuide {
        self.risk_assessment.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_defaults_missing_sections() {
        let table = RequirementTable::from_json_str(
            r#"{ "residenceMaterials": { "options": ["A", "B"] } }"#,
        )
        .expect("partial table parses");

        assert_eq!(table.residence_options(), vec!["A", "B"]);
        assert!(table.basic_baseline().is_empty());
        assert!(table.identity_materials(IdentityKind::Employed).is_empty());
        assert!(table
            .tax_requirement(ConsulateCode::parse("shanghai").as_ref(), VisaDuration::Three)
            .is_none());
        assert!(table.visa_requirement(VisaDuration::Five).bank_balance.is_none());
    }

    #[test]
    fn tax_requirement_falls_back_to_beijing() {
        let table = RequirementTable::from_json_str(
            r#"{
                "processMethods": { "TAX": { "requirements": {
                    "beijing": { "THREE": { "amount": 20000, "description": "北京领区三年" } }
                } } }
            }"#,
        )
        .expect("table parses");

        let entry = table
            .tax_requirement(ConsulateCode::parse("chengdu").as_ref(), VisaDuration::Three)
            .expect("beijing fallback");
        assert_eq!(entry.description, "北京领区三年");
        assert_eq!(entry.amount_in_wan(), 2.0);
    }

    #[test]
    fn accessors_return_independent_copies() {
        let table = RequirementTable::standard();
        let mut banks = table.supported_banks();
        banks.clear();
        assert!(!table.supported_banks().is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = RequirementTable::from_json_str("{ not json").expect_err("parse fails");
        assert!(matches!(err, RequirementTableError::Parse(_)));
    }
}
