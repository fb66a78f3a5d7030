//! Academic-proof strategy for the STUDENT process.
//!
//! Both the financial generator and the coordinator route through [`StudentTrack`], so the
//! student wording lives in exactly one place.

use tracing::debug;

use super::super::domain::{ApplicantProfile, GraduateStatus, IdentityKind, VisaDuration};
use super::super::requirements::RequirementTable;
use super::super::sections::SectionKind;

const GRADUATE_FALLBACK: &str = "提供学信网电子学历注册备案表（毕业三年内）";
const ENROLLED_FALLBACK: &str = "提供学信网在线学籍验证报告（领区内大学在读）";
const NON_STUDENT_NOTE: &str = "非在读学生使用特定大学生办理方式，需要提供曾经的学籍或学历证明";

pub(crate) struct StudentTrack<'a> {
    table: &'a RequirementTable,
}

impl<'a> StudentTrack<'a> {
    pub(crate) fn new(table: &'a RequirementTable) -> Self {
        Self { table }
    }

    /// Graduated applicants get the degree filing; everyone else the enrollment report.
    pub(crate) fn academic_proof(&self, profile: &ApplicantProfile) -> String {
        let education = &self.table.visa_requirement(VisaDuration::Single).education;
        match profile.graduate_status {
            GraduateStatus::Graduated => education
                .graduate
                .clone()
                .unwrap_or_else(|| GRADUATE_FALLBACK.to_string()),
            _ => education
                .student
                .clone()
                .unwrap_or_else(|| ENROLLED_FALLBACK.to_string()),
        }
    }

    /// Section replacing identity and financial proof under the STUDENT process.
    pub(crate) fn section(&self, profile: &ApplicantProfile) -> (SectionKind, Vec<String>) {
        let section = match profile.identity {
            Some(IdentityKind::Student) => {
                let record = match profile.graduate_status {
                    GraduateStatus::Enrolled => "学籍信息",
                    _ => "学历信息",
                };
                (
                    SectionKind::AcademicProof,
                    vec![
                        self.academic_proof(profile),
                        format!("登录学信网(https://www.chsi.com.cn/)，查询并打印{record}，须本人签名"),
                    ],
                )
            }
            Some(IdentityKind::Employed) => (
                SectionKind::AcademicProof,
                vec![
                    "学信网电子注册备案表".to_string(),
                    "在职证明原件（加盖单位公章）".to_string(),
                ],
            ),
            _ => (
                SectionKind::AcademicProofWithNote,
                vec![NON_STUDENT_NOTE.to_string()],
            ),
        };
        debug!(identity = ?profile.identity, section = ?section.0, "student track section");
        section
    }

    /// Academic section for a STUDENT identity using the normal or simplified process.
    pub(crate) fn enrollment_section(&self, profile: &ApplicantProfile) -> Vec<String> {
        vec![self.academic_proof(profile)]
    }
}
