//! Downloadable checklist documents.
//!
//! Renderers are synchronous and only see the finished [`DocumentList`] plus the profile it
//! was generated from; they never re-run generation.

use std::fmt::{self, Write as _};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{consulate_display, ApplicantProfile, FamilyRelation};
use super::engine::visa_type_text;
use super::sections::{DocumentList, SectionKind};

pub const DOCUMENT_TITLE: &str = "日本签证申请材料清单";
const UNNAMED_APPLICANT: &str = "未命名申请人";
const UNSPECIFIED: &str = "未指定";
const DISCLAIMER: &str =
    "本材料清单由系统自动生成，仅供参考。最终所需材料请以日本驻华使领馆官方要求为准。";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to format checklist document: {0}")]
    Format(#[from] fmt::Error),
}

/// Turns a generated checklist into a downloadable document.
pub trait ChecklistRenderer: Send + Sync {
    fn content_type(&self) -> &'static str;

    fn file_extension(&self) -> &'static str;

    fn render(
        &self,
        list: &DocumentList,
        profile: &ApplicantProfile,
    ) -> Result<Vec<u8>, RenderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Html,
    Text,
}

impl RenderFormat {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "html" | "htm" => Some(Self::Html),
            "text" | "txt" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn renderer(self, generated_on: NaiveDate) -> Box<dyn ChecklistRenderer> {
        match self {
            Self::Html => Box::new(HtmlRenderer::new(generated_on)),
            Self::Text => Box::new(TextRenderer),
        }
    }
}

fn applicant_name(profile: &ApplicantProfile) -> &str {
    profile.applicant_name.as_deref().unwrap_or(UNNAMED_APPLICANT)
}

fn identity_text(profile: &ApplicantProfile) -> &'static str {
    profile
        .identity
        .map(|identity| identity.label())
        .unwrap_or(UNSPECIFIED)
}

fn relation_text(relation: Option<FamilyRelation>) -> &'static str {
    match relation {
        Some(FamilyRelation::Other) => "其他亲属",
        Some(relation) => relation.label(),
        None => UNSPECIFIED,
    }
}

/// Plain UTF-8 text, one section per block.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl ChecklistRenderer for TextRenderer {
    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn render(
        &self,
        list: &DocumentList,
        profile: &ApplicantProfile,
    ) -> Result<Vec<u8>, RenderError> {
        let mut out = String::new();
        writeln!(out, "{DOCUMENT_TITLE}")?;
        writeln!(out, "申请人: {}", applicant_name(profile))?;

        for (kind, lines) in list.iter() {
            writeln!(out)?;
            writeln!(out, "【{}】", kind.title())?;
            for line in lines {
                writeln!(out, "  {line}")?;
            }
        }

        writeln!(out)?;
        writeln!(out, "{DISCLAIMER}")?;
        Ok(out.into_bytes())
    }
}

/// Self-contained HTML page; every interpolated value is escaped.
#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer {
    generated_on: NaiveDate,
}

impl HtmlRenderer {
    pub fn new(generated_on: NaiveDate) -> Self {
        Self { generated_on }
    }

    fn write_info_box(&self, out: &mut String, profile: &ApplicantProfile) -> fmt::Result {
        let date = self.generated_on.format("%Y-%m-%d").to_string();
        let visa_type = visa_type_text(profile);
        let rows = [
            ("申请人姓名", applicant_name(profile)),
            ("签证类型", visa_type.as_str()),
            ("申请人身份", identity_text(profile)),
            (
                "申请领区",
                consulate_display(profile.residence_consulate.as_ref()),
            ),
            ("生成日期", date.as_str()),
        ];

        writeln!(out, "<div class=\"info-box\">")?;
        for (label, value) in rows {
            writeln!(
                out,
                "<p><strong>{}：</strong>{}</p>",
                escape(label),
                escape(value)
            )?;
        }
        writeln!(out, "</div>")
    }

    fn write_confirmation(&self, out: &mut String, profile: &ApplicantProfile) -> fmt::Result {
        writeln!(out, "<div class=\"details-box\">")?;
        writeln!(out, "<h2>申请人信息确认</h2>")?;
        writeln!(out, "<p>请确认以下申请人信息正确无误。</p>")?;

        writeln!(out, "<h3>主申请人信息</h3>")?;
        detail(
            out,
            "居住地领区",
            consulate_display(profile.residence_consulate.as_ref()),
        )?;
        detail(
            out,
            "户籍所在地领区",
            consulate_display(profile.hukou_consulate.as_ref()),
        )?;
        detail(out, "申请人身份", identity_text(profile))?;
        detail(out, "申请类型", profile.application.label())?;
        if let Some(process) = profile.process {
            detail(out, "办理方式", process.label())?;
        }

        if !profile.family_members.is_empty() {
            writeln!(out, "<h3>家庭成员信息</h3>")?;
            for (index, member) in profile.family_members.iter().enumerate() {
                writeln!(out, "<div class=\"family-member\">")?;
                writeln!(out, "<h4>{}</h4>", escape(&member.display_name(index + 1)))?;
                detail(out, "与主申请人关系", relation_text(member.relation))?;
                detail(
                    out,
                    "身份类型",
                    member
                        .identity
                        .map(|identity| identity.label())
                        .unwrap_or(UNSPECIFIED),
                )?;
                detail(
                    out,
                    "居住地领区",
                    consulate_display(member.residence_consulate.as_ref()),
                )?;
                detail(
                    out,
                    "户籍所在地领区",
                    consulate_display(member.hukou_consulate.as_ref()),
                )?;
                writeln!(out, "</div>")?;
            }
        }

        writeln!(out, "</div>")
    }
}

fn detail(out: &mut String, label: &str, value: &str) -> fmt::Result {
    writeln!(
        out,
        "<p class=\"member-detail\"><strong>{}: </strong>{}</p>",
        escape(label),
        escape(value)
    )
}

fn write_section(out: &mut String, kind: SectionKind, lines: &[String]) -> fmt::Result {
    writeln!(out, "<h2>{}</h2>", escape(kind.title()))?;

    if kind == SectionKind::BasicInfo {
        writeln!(out, "<table class=\"basic-info\">")?;
        for line in lines {
            match line.split_once(':') {
                Some((label, value)) => writeln!(
                    out,
                    "<tr><th>{}:</th><td>{}</td></tr>",
                    escape(label),
                    escape(value.trim())
                )?,
                None => writeln!(out, "<tr><td colspan=\"2\">{}</td></tr>", escape(line))?,
            }
        }
        return writeln!(out, "</table>");
    }

    writeln!(out, "<ul>")?;
    for line in lines {
        writeln!(out, "<li>{}</li>", escape(line))?;
    }
    writeln!(out, "</ul>")
}

const STYLE: &str = "body{font-family:\"Noto Sans CJK SC\",\"Microsoft YaHei\",sans-serif;margin:40px;color:#333}\
h1{text-align:center}\
h2{border-bottom:1px solid #ccc;padding-bottom:5px;margin-top:25px}\
.info-box,.details-box{background:#f5f5f5;border-radius:5px;padding:15px;margin:20px 0}\
table.basic-info{width:100%;border-collapse:collapse}\
table.basic-info th{width:30%;text-align:left;background:#f8f8f8;padding:12px}\
table.basic-info td{padding:12px;border-bottom:1px solid #eee}\
li{margin-bottom:12px}\
.footer{margin-top:40px;font-size:12px;color:#777;text-align:center}";

impl ChecklistRenderer for HtmlRenderer {
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }

    fn render(
        &self,
        list: &DocumentList,
        profile: &ApplicantProfile,
    ) -> Result<Vec<u8>, RenderError> {
        let mut out = String::new();
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"zh-CN\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{DOCUMENT_TITLE}</title>")?;
        writeln!(out, "<style>{STYLE}</style>")?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h1>{DOCUMENT_TITLE}</h1>")?;

        self.write_info_box(&mut out, profile)?;
        self.write_confirmation(&mut out, profile)?;
        for (kind, lines) in list.iter() {
            write_section(&mut out, kind, lines)?;
        }

        writeln!(out, "<div class=\"footer\">")?;
        writeln!(out, "<p>{DISCLAIMER}</p>")?;
        writeln!(
            out,
            "<p>生成日期：{}</p>",
            self.generated_on.format("%Y-%m-%d")
        )?;
        writeln!(out, "</div>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        Ok(out.into_bytes())
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
