use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower-cased consulate jurisdiction code such as `beijing` or `shanghai`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConsulateCode(String);

pub const BEIJING: &str = "beijing";
pub const SHANGHAI: &str = "shanghai";
pub const UNSUPPORTED_CONSULATE: &str = "other";

const CONSULATE_NAMES: [(&str, &str); 33] = [
    ("beijing", "北京"),
    ("shanghai", "上海"),
    ("guangzhou", "广州"),
    ("shenyang", "沈阳"),
    ("qingdao", "青岛"),
    ("dalian", "大连"),
    ("chongqing", "重庆"),
    ("wuhan", "武汉"),
    ("xian", "西安"),
    ("fuzhou", "福州"),
    ("nanning", "南宁"),
    ("hangzhou", "杭州"),
    ("nanjing", "南京"),
    ("chengdu", "成都"),
    ("shenzhen", "深圳"),
    ("suzhou", "苏州"),
    ("tianjin", "天津"),
    ("haerbin", "哈尔滨"),
    ("changsha", "长沙"),
    ("kunming", "昆明"),
    ("xiamen", "厦门"),
    ("jinan", "济南"),
    ("hefei", "合肥"),
    ("zhengzhou", "郑州"),
    ("nanchang", "南昌"),
    ("guiyang", "贵阳"),
    ("lanzhou", "兰州"),
    ("xining", "西宁"),
    ("yinchuan", "银川"),
    ("huhehaote", "呼和浩特"),
    ("wulumuqi", "乌鲁木齐"),
    ("lasa", "拉萨"),
    ("other", "其他"),
];

impl ConsulateCode {
    /// Normalize raw questionnaire input; blank input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is(&self, code: &str) -> bool {
        self.0 == code
    }

    pub fn is_supported(&self) -> bool {
        !self.is(UNSUPPORTED_CONSULATE)
    }

    pub fn display_name(&self) -> &'static str {
        CONSULATE_NAMES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
            .unwrap_or(UNSPECIFIED_CONSULATE)
    }
}

impl fmt::Display for ConsulateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const UNSPECIFIED_CONSULATE: &str = "未指定";

/// Display name for an optional consulate, `未指定` when missing or unknown.
pub fn consulate_display(code: Option<&ConsulateCode>) -> &'static str {
    code.map(ConsulateCode::display_name)
        .unwrap_or(UNSPECIFIED_CONSULATE)
}

/// A person needs residence proof iff both consulates are known and differ.
pub fn needs_residence_proof(
    residence: Option<&ConsulateCode>,
    hukou: Option<&ConsulateCode>,
) -> bool {
    match (residence, hukou) {
        (Some(residence), Some(hukou)) => residence != hukou,
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationMode {
    #[default]
    Individual,
    Family,
    Binding,
    Economic,
}

impl ApplicationMode {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "FAMILY" => Self::Family,
            "BINDING" => Self::Binding,
            "ECONOMIC" => Self::Economic,
            _ => Self::Individual,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Individual => "个人申请",
            Self::Family => "家庭申请",
            Self::Binding => "绑签申请",
            Self::Economic => "经济材料申请",
        }
    }
}

/// Financial-proof strategy selected by the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessMode {
    Normal,
    Tax,
    Student,
    Simplified,
    /// Present but unrecognized.
    Other,
}

impl ProcessMode {
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }
        Some(match value.to_ascii_uppercase().as_str() {
            "NORMAL" => Self::Normal,
            "TAX" => Self::Tax,
            "STUDENT" => Self::Student,
            "SIMPLIFIED" => Self::Simplified,
            _ => Self::Other,
        })
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "常规办理",
            Self::Tax => "税单办理",
            Self::Student => "特定大学生办理",
            Self::Simplified => "新政简化办理",
            Self::Other => "其他办理方式",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentityKind {
    Employed,
    Student,
    Retired,
    Freelancer,
    Child,
    Unemployed,
    Other,
}

impl IdentityKind {
    /// Folds legacy aliases (`FREELANCE`) into their canonical variant.
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }
        Some(match value.to_ascii_uppercase().as_str() {
            "EMPLOYED" => Self::Employed,
            "STUDENT" => Self::Student,
            "RETIRED" => Self::Retired,
            "FREELANCER" | "FREELANCE" => Self::Freelancer,
            "CHILD" => Self::Child,
            "UNEMPLOYED" => Self::Unemployed,
            _ => Self::Other,
        })
    }

    /// Key used by the requirement table.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Employed => "EMPLOYED",
            Self::Student => "STUDENT",
            Self::Retired => "RETIRED",
            Self::Freelancer => "FREELANCER",
            Self::Child => "CHILD",
            Self::Unemployed => "UNEMPLOYED",
            Self::Other => "OTHER",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Employed => "在职人员",
            Self::Student => "学生",
            Self::Retired => "退休人员",
            Self::Freelancer => "自由职业者",
            Self::Child => "学龄前儿童",
            Self::Unemployed => "无业人员",
            Self::Other => "一般申请人",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisaDuration {
    #[default]
    Single,
    Three,
    Five,
}

impl VisaDuration {
    /// Recognizes the literal tokens only; anything else is `None`.
    pub fn from_token(raw: &str) -> Option<Self> {
        match raw.trim() {
            "SINGLE" | "single" | "单次" => Some(Self::Single),
            "THREE" | "three" | "三年多次" => Some(Self::Three),
            "FIVE" | "five" | "五年多次" => Some(Self::Five),
            _ => None,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Three => "THREE",
            Self::Five => "FIVE",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "单次签证",
            Self::Three => "三年多次往返签证",
            Self::Five => "五年多次往返签证",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HukouType {
    Family,
    Collective,
}

impl HukouType {
    /// Missing or `auto` means a family register; unknown text yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "auto" | "family" => Some(Self::Family),
            "collective" => Some(Self::Collective),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FamilyRelation {
    Spouse,
    Parent,
    Child,
    Other,
}

impl FamilyRelation {
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }
        Some(match value.to_ascii_uppercase().as_str() {
            "SPOUSE" => Self::Spouse,
            "PARENT" => Self::Parent,
            "CHILD" => Self::Child,
            _ => Self::Other,
        })
    }

    /// How the applicant is related to the visa holder, empty for `Other`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spouse => "配偶",
            Self::Parent => "父母",
            Self::Child => "子女",
            Self::Other => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraduateStatus {
    Graduated,
    Enrolled,
    #[default]
    Unspecified,
}

impl GraduateStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "graduate" | "已毕业" => Self::Graduated,
            "current" | "在读" => Self::Enrolled,
            _ => Self::Unspecified,
        }
    }
}

/// Explicit economic material picked for the normal process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EconomicMaterial {
    CreditCard,
    Salary(VisaDuration),
    Deposit(VisaDuration),
}

impl EconomicMaterial {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "credit_card" => Some(Self::CreditCard),
            "salary_single" => Some(Self::Salary(VisaDuration::Single)),
            "salary_three" => Some(Self::Salary(VisaDuration::Three)),
            "salary_five" => Some(Self::Salary(VisaDuration::Five)),
            "deposit_single" => Some(Self::Deposit(VisaDuration::Single)),
            "deposit_three" => Some(Self::Deposit(VisaDuration::Three)),
            "deposit_five" => Some(Self::Deposit(VisaDuration::Five)),
            _ => None,
        }
    }
}

/// Household member listed on a family application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub name: Option<String>,
    pub residence_consulate: Option<ConsulateCode>,
    pub hukou_consulate: Option<ConsulateCode>,
    pub identity: Option<IdentityKind>,
    pub relation: Option<FamilyRelation>,
}

impl FamilyMember {
    /// Name shown in generated lines; `position` is 1-based.
    pub fn display_name(&self, position: usize) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("家庭成员{position}"),
        }
    }

    pub fn needs_residence_proof(&self) -> bool {
        needs_residence_proof(
            self.residence_consulate.as_ref(),
            self.hukou_consulate.as_ref(),
        )
    }

    pub fn has_identity(&self, identity: IdentityKind) -> bool {
        self.identity == Some(identity)
    }
}

/// Canonical applicant questionnaire after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub applicant_name: Option<String>,
    pub residence_consulate: Option<ConsulateCode>,
    pub hukou_consulate: Option<ConsulateCode>,
    pub application: ApplicationMode,
    pub process: Option<ProcessMode>,
    pub identity: Option<IdentityKind>,
    pub visa_duration: VisaDuration,
    pub hukou_type: Option<HukouType>,
    pub family_relation: Option<FamilyRelation>,
    pub family_visa_duration: Option<VisaDuration>,
    pub graduate_status: GraduateStatus,
    pub economic_material: Option<EconomicMaterial>,
    pub has_family: bool,
    pub family_members: Vec<FamilyMember>,
}

impl ApplicantProfile {
    pub fn resides_in(&self, code: &str) -> bool {
        self.residence_consulate
            .as_ref()
            .map(|consulate| consulate.is(code))
            .unwrap_or(false)
    }

    pub fn is_identity(&self, identity: IdentityKind) -> bool {
        self.identity == Some(identity)
    }

    pub fn is_process(&self, process: ProcessMode) -> bool {
        self.process == Some(process)
    }

    pub fn main_needs_residence_proof(&self) -> bool {
        needs_residence_proof(
            self.residence_consulate.as_ref(),
            self.hukou_consulate.as_ref(),
        )
    }

    pub fn any_member_is(&self, identity: IdentityKind) -> bool {
        self.family_members
            .iter()
            .any(|member| member.has_identity(identity))
    }
}
