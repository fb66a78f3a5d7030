use std::collections::BTreeMap;

use super::{
    AmountRequirement, BankStatement, BasicMaterialsTable, DurationTable, EconomicMaterialsTable,
    EducationTexts, HukouDetails, ProcessMethods, RequirementTable, ResidenceMaterialsTable,
    RiskGuide, SimplifiedRequirement, TaxMethod, VisaRequirement,
};

pub(super) fn standard_table() -> RequirementTable {
    RequirementTable {
        basic_materials: BasicMaterialsTable {
            all: strings(&[
                "护照原件+首页彩色复印件（剩余有效期大于7个月）",
                "签证申请表（双面打印）",
                "小两寸（3.5cmx4.5cm）白底证件照（近期6个月内拍摄）",
                "户口本复印件",
            ]),
            details: HukouDetails {
                family: "家庭户：户首页+户主页+本人页".to_string(),
                collective: "集体户：户首页+本人页".to_string(),
            },
        },
        identity_materials: identity_materials(),
        process_methods: ProcessMethods {
            tax: TaxMethod {
                requirements: tax_requirements(),
            },
        },
        visa_requirements: visa_requirements(),
        economic_materials: EconomicMaterialsTable {
            bank_statement: BankStatement {
                supported_banks: strings(&[
                    "中国银行",
                    "中国工商银行",
                    "中国建设银行",
                    "中国农业银行",
                    "招商银行",
                ]),
            },
        },
        residence_materials: ResidenceMaterialsTable {
            options: strings(&[
                "派出所开具的居住证确认单（原件）",
                "工作居住证确认单（可复印或扫描）",
                "居住证卡片原件（需提供原件）",
            ]),
        },
        risk_assessment: RiskGuide {
            high_risk_groups: strings(&[
                "自由职业",
                "低学历（高中及以下）",
                "无纳税记录",
                "无社保记录",
                "护照白本申请",
                "高危户籍",
            ]),
            tax_verification: "税单有盖章的，需要补充社保缴纳证明及营业执照复印件确认居住条件"
                .to_string(),
            frequent_job_change: "过去五年社保缴纳单位变更频繁的，需通过滞留风险评估方案"
                .to_string(),
        },
    }
}

fn identity_materials() -> BTreeMap<String, Vec<String>> {
    let mut materials = BTreeMap::new();
    materials.insert(
        "EMPLOYED".to_string(),
        strings(&[
            "在职证明原件（需加盖公章，注明职位、入职时间、准假时间）",
            "近一年的个人所得税税单（从去年到今年相同月份）",
        ]),
    );
    materials.insert(
        "STUDENT".to_string(),
        strings(&["学信网在线学籍验证报告", "在读证明原件（加盖学校公章）"]),
    );
    materials.insert("RETIRED".to_string(), strings(&["退休证复印件"]));
    materials.insert(
        "FREELANCER".to_string(),
        strings(&[
            "自由职业情况说明（收入来源及相关附件证明）",
            "个税app无需开具的截图",
        ]),
    );
    materials.insert(
        "CHILD".to_string(),
        strings(&["出生证明复印件", "父母双方身份证复印件"]),
    );
    materials
}

fn tax_requirements() -> BTreeMap<String, DurationTable<AmountRequirement>> {
    let mut requirements = BTreeMap::new();
    requirements.insert(
        "beijing".to_string(),
        DurationTable {
            single: amount(5_000.0, "北京领区：近一年个人所得税缴纳额5000元以上"),
            three: amount(20_000.0, "北京领区：近一年个人所得税缴纳额2万元以上"),
            five: amount(50_000.0, "北京领区：近一年个人所得税缴纳额5万元以上"),
        },
    );
    requirements.insert(
        "shanghai".to_string(),
        DurationTable {
            single: amount(5_000.0, "上海领区：近一年个人所得税缴纳额5000元以上（需在上海领区内缴纳）"),
            three: amount(20_000.0, "上海领区：近一年个人所得税缴纳额2万元以上（需在上海领区内缴纳）"),
            five: amount(50_000.0, "上海领区：近一年个人所得税缴纳额5万元以上（需在上海领区内缴纳）"),
        },
    );
    requirements
}

fn visa_requirements() -> DurationTable<VisaRequirement> {
    DurationTable {
        single: VisaRequirement {
            bank_balance: Some(amount(100_000.0, "")),
            tax_amount: None,
            education: EducationTexts {
                graduate: Some("提供学信网电子学历注册备案表（毕业三年内）".to_string()),
                student: Some("提供学信网在线学籍验证报告（领区内大学在读）".to_string()),
            },
            simplified: SimplifiedRequirement::default(),
        },
        three: VisaRequirement {
            bank_balance: Some(amount(500_000.0, "")),
            tax_amount: Some(amount(20_000.0, "")),
            education: EducationTexts::default(),
            simplified: SimplifiedRequirement {
                requirements: strings(&[
                    "过去三年内有日本短期签证的出入境记录",
                    "提供的签证发放通知书必须是本人的，且已赴日旅行",
                    "护照首页及日本签证页、出入境记录页复印件",
                ]),
            },
        },
        five: VisaRequirement {
            bank_balance: Some(amount(1_000_000.0, "")),
            tax_amount: Some(amount(50_000.0, "")),
            education: EducationTexts::default(),
            simplified: SimplifiedRequirement::default(),
        },
    }
}

fn amount(amount: f64, description: &str) -> AmountRequirement {
    AmountRequirement {
        amount,
        description: description.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
