use tracing::debug;

use super::super::domain::{
    ApplicantProfile, ApplicationMode, EconomicMaterial, IdentityKind, ProcessMode, VisaDuration,
};
use super::super::requirements::RequirementTable;
use super::student::StudentTrack;

const BINDING_HOLDER_INCOME: &str = "签证持有人的财力证明材料（能够确认年收入的存款证明或税单）";
const GENERIC_TAX_LINE: &str = "税单办理：请准备符合要求的个人所得税税单";
const SALARY_CONTINUITY: &str = "备注：近期6个月工资项流水需要是连续的";

/// Financial proof for the applicant's chosen strategy; branches are mutually exclusive.
pub(crate) fn financial_materials(
    profile: &ApplicantProfile,
    table: &RequirementTable,
) -> Vec<String> {
    if profile.application == ApplicationMode::Binding {
        return vec![BINDING_HOLDER_INCOME.to_string()];
    }
    if profile.application == ApplicationMode::Economic {
        return vec![
            "使用直系亲属的经济材料（存款证明、税单等）".to_string(),
            "需提供关系证明".to_string(),
        ];
    }

    let materials = match profile.process {
        Some(ProcessMode::Tax) => tax_materials(profile, table),
        Some(ProcessMode::Student) => vec![StudentTrack::new(table).academic_proof(profile)],
        Some(ProcessMode::Simplified) => table.simplified_requirements(),
        _ => normal_materials(profile, table),
    };

    debug!(process = ?profile.process, count = materials.len(), "financial materials resolved");
    materials
}

fn tax_materials(profile: &ApplicantProfile, table: &RequirementTable) -> Vec<String> {
    let line = match table.tax_requirement(profile.residence_consulate.as_ref(), profile.visa_duration)
    {
        Some(entry) if !entry.description.is_empty() => format!("税单办理：{}", entry.description),
        Some(entry) if entry.amount > 0.0 => format!(
            "税单办理：近一年个人所得税缴纳额{}万元以上",
            entry.amount_in_wan()
        ),
        _ => GENERIC_TAX_LINE.to_string(),
    };
    vec![line]
}

fn normal_materials(profile: &ApplicantProfile, table: &RequirementTable) -> Vec<String> {
    if let Some(material) = profile.economic_material {
        return economic_material_lines(profile, material);
    }

    let requirement = table.visa_requirement(profile.visa_duration);
    let mut materials = Vec::new();

    if let Some(bank) = requirement.bank_balance.as_ref().filter(|bank| bank.is_configured()) {
        let banks = banks_text(&table.supported_banks());
        if bank.description.is_empty() {
            materials.push(format!(
                "存款证明：需提供{}万以上的存款证明（{banks}可出具）",
                bank.amount_in_wan()
            ));
        } else {
            materials.push(format!("存款证明：{}（{banks}可出具）", bank.description));
        }
    }

    if profile.is_identity(IdentityKind::Employed) {
        if let Some(tax) = requirement.tax_amount.as_ref().filter(|tax| tax.is_configured()) {
            if tax.description.is_empty() {
                materials.push(format!(
                    "税单要求：近一年的个人所得税税单，金额超过{}万",
                    tax.amount_in_wan()
                ));
            } else {
                materials.push(format!("税单要求：{}", tax.description));
            }
        }
    }

    materials
}

fn economic_material_lines(profile: &ApplicantProfile, material: EconomicMaterial) -> Vec<String> {
    match material {
        EconomicMaterial::CreditCard
            if profile.application == ApplicationMode::Family
                && profile.visa_duration == VisaDuration::Single =>
        {
            vec!["家庭申请单次签证不能使用信用卡，请使用存款/理财证明或其他财力证明".to_string()]
        }
        EconomicMaterial::CreditCard => vec![
            "信用卡正反面复印件（自行遮挡CVV码）".to_string(),
            "信用卡有效性证明（近三个月电子账单截图或POS机回单）".to_string(),
        ],
        EconomicMaterial::Deposit(tier) => {
            let amount = match tier {
                VisaDuration::Single => 10,
                VisaDuration::Three => 50,
                VisaDuration::Five => 100,
            };
            vec![format!(
                "{amount}万元以上存款/理财证明原件（需要是可验证银行开具的存款/理财证明）"
            )]
        }
        EconomicMaterial::Salary(tier) => {
            let amount = match tier {
                VisaDuration::Single => 10,
                VisaDuration::Three => 20,
                VisaDuration::Five => 50,
            };
            vec![
                format!("近期12个月可认定为工资的可验证银行账户对账单（统计年收入{amount}万以上）"),
                SALARY_CONTINUITY.to_string(),
            ]
        }
    }
}

/// First three supported banks joined with `、`, then `等银行`.
fn banks_text(banks: &[String]) -> String {
    let listed: Vec<&str> = banks.iter().take(3).map(String::as_str).collect();
    format!("{}等银行", listed.join("、"))
}
