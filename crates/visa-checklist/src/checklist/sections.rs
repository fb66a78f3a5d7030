use std::collections::BTreeMap;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Named checklist section. Declaration order is the canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    BasicInfo,
    BasicMaterials,
    AcademicProof,
    AcademicProofWithNote,
    EmploymentProof,
    FinancialProof,
    ResidenceProof,
    FamilyMaterials,
    OtherMaterials,
}

impl SectionKind {
    pub const fn ordered() -> [SectionKind; 9] {
        [
            SectionKind::BasicInfo,
            SectionKind::BasicMaterials,
            SectionKind::AcademicProof,
            SectionKind::AcademicProofWithNote,
            SectionKind::EmploymentProof,
            SectionKind::FinancialProof,
            SectionKind::ResidenceProof,
            SectionKind::FamilyMaterials,
            SectionKind::OtherMaterials,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            SectionKind::BasicInfo => "basic_info",
            SectionKind::BasicMaterials => "basic_materials",
            SectionKind::AcademicProof => "academic_proof",
            SectionKind::AcademicProofWithNote => "academic_proof_with_note",
            SectionKind::EmploymentProof => "employment_proof",
            SectionKind::FinancialProof => "financial_proof",
            SectionKind::ResidenceProof => "residence_proof",
            SectionKind::FamilyMaterials => "family_materials",
            SectionKind::OtherMaterials => "other_materials",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            SectionKind::BasicInfo => "基本信息",
            SectionKind::BasicMaterials => "基本材料",
            SectionKind::AcademicProof => "学籍/学历证明",
            SectionKind::AcademicProofWithNote => "学籍/学历证明及情况说明",
            SectionKind::EmploymentProof => "工作证明",
            SectionKind::FinancialProof => "财力证明",
            SectionKind::ResidenceProof => "居住证明材料",
            SectionKind::FamilyMaterials => "家属材料",
            SectionKind::OtherMaterials => "其他材料",
        }
    }
}

/// Ordered mapping from section to its lines; empty sections are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentList {
    sections: BTreeMap<SectionKind, Vec<String>>,
}

impl DocumentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `lines` under `kind`, replacing earlier content. Empty input is ignored.
    pub fn insert(&mut self, kind: SectionKind, lines: Vec<String>) {
        if lines.is_empty() {
            return;
        }
        self.sections.insert(kind, lines);
    }

    /// Append one line to an existing section; no-op when the section is absent.
    pub fn append_to(&mut self, kind: SectionKind, line: impl Into<String>) {
        if let Some(lines) = self.sections.get_mut(&kind) {
            lines.push(line.into());
        }
    }

    pub fn get(&self, kind: SectionKind) -> Option<&[String]> {
        self.sections.get(&kind).map(Vec::as_slice)
    }

    pub fn contains(&self, kind: SectionKind) -> bool {
        self.sections.contains_key(&kind)
    }

    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionKind, &[String])> {
        self.sections
            .iter()
            .map(|(kind, lines)| (*kind, lines.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn views(&self) -> Vec<SectionView<'_>> {
        self.iter()
            .map(|(kind, items)| SectionView {
                key: kind.key(),
                title: kind.title(),
                items,
            })
            .collect()
    }
}

/// JSON shape of one section in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SectionView<'a> {
    pub key: &'static str,
    pub title: &'static str,
    pub items: &'a [String],
}

impl Serialize for DocumentList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.sections.len()))?;
        for view in self.views() {
            seq.serialize_element(&view)?;
        }
        seq.end()
    }
}
