use crate::infra::{checklist_service, parse_date, read_form};
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use serde_json::{json, Value};
use std::io::Write;
use std::path::PathBuf;
use visa_checklist::checklist::{RenderFormat, RiskAssessment};
use visa_checklist::config::AppConfig;
use visa_checklist::error::AppError;
use visa_checklist::ChecklistService;

const SCENARIO_KEYS: [&str; 5] = [
    "beijing-employed",
    "shanghai-family",
    "binding-spouse",
    "enrolled-student",
    "tax-freelancer",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl OutputFormat {
    fn render_format(self) -> Option<RenderFormat> {
        match self {
            Self::Text => Some(RenderFormat::Text),
            Self::Html => Some(RenderFormat::Html),
            Self::Json => None,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    /// Questionnaire JSON file (`-` reads stdin)
    #[arg(long)]
    pub(crate) form: PathBuf,
    /// Output document format
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: OutputFormat,
    /// Write the document here instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Requirement table JSON replacing the configured table
    #[arg(long)]
    pub(crate) requirements: Option<PathBuf>,
    /// Generation date printed in the document (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only print the named scenario
    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(SCENARIO_KEYS))]
    pub(crate) scenario: Option<String>,
    /// Requirement table JSON replacing the configured table
    #[arg(long)]
    pub(crate) requirements: Option<PathBuf>,
    /// Skip the overstay-risk screening printed after each checklist
    #[arg(long)]
    pub(crate) skip_risk: bool,
}

pub(crate) struct DemoScenario {
    pub(crate) key: &'static str,
    pub(crate) title: &'static str,
    pub(crate) form: Value,
}

pub(crate) fn scenarios() -> Vec<DemoScenario> {
    vec![
        DemoScenario {
            key: SCENARIO_KEYS[0],
            title: "Beijing resident, employed, three-year visa, Shanghai household register",
            form: json!({
                "applicantName": "张三",
                "residenceConsulate": "beijing",
                "hukouConsulate": "shanghai",
                "applicationType": "INDIVIDUAL",
                "processType": "NORMAL",
                "identityType": "EMPLOYED",
                "visaType": "THREE",
                "taxPayment": "REGULAR",
                "socialInsurance": "REGULAR",
                "educationLevel": "BACHELOR"
            }),
        },
        DemoScenario {
            key: SCENARIO_KEYS[1],
            title: "Shanghai family application with a retired spouse and a student child",
            form: json!({
                "applicantName": "李雷",
                "residenceConsulate": "shanghai",
                "hukouConsulate": "beijing",
                "applicationType": "FAMILY",
                "processType": "NORMAL",
                "identityType": "EMPLOYED",
                "visaType": "FIVE",
                "familyMembers": [
                    { "name": "韩梅梅", "residenceConsulate": "shanghai",
                      "hukouConsulate": "shanghai", "identityType": "RETIRED", "relation": "SPOUSE" },
                    { "name": "李小明", "residenceConsulate": "shanghai",
                      "hukouConsulate": "guangzhou", "identityType": "STUDENT", "relation": "CHILD" }
                ],
                "taxPayment": "REGULAR",
                "socialInsurance": "REGULAR"
            }),
        },
        DemoScenario {
            key: SCENARIO_KEYS[2],
            title: "Spouse joining a five-year visa holder",
            form: json!({
                "applicantName": "王芳",
                "residenceConsulate": "beijing",
                "hukouConsulate": "beijing",
                "applicationType": "BINDING",
                "familyRelation": "SPOUSE",
                "familyVisaType": "FIVE",
                "identityType": "UNEMPLOYED"
            }),
        },
        DemoScenario {
            key: SCENARIO_KEYS[3],
            title: "Enrolled university student on the student process",
            form: json!({
                "applicantName": "赵敏",
                "residenceConsulate": "shanghai",
                "hukouConsulate": "chengdu",
                "processType": "STUDENT",
                "identityType": "STUDENT",
                "graduateStatus": "current",
                "passportStatus": "NEW"
            }),
        },
        DemoScenario {
            key: SCENARIO_KEYS[4],
            title: "Freelancer applying with tax records from a non-configured consulate",
            form: json!({
                "applicantName": "周杰",
                "residenceConsulate": "guangzhou",
                "hukouConsulate": "guangzhou",
                "processType": "TAX",
                "identityType": "FREELANCE",
                "visaType": "SINGLE",
                "hukouType": "collective",
                "taxPayment": "REGULAR",
                "taxStamped": true
            }),
        },
    ]
}

pub(crate) fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let GenerateArgs {
        form,
        format,
        output,
        requirements,
        date,
    } = args;

    let config = AppConfig::load()?;
    let service = checklist_service(&config, requirements)?;
    let form = read_form(&form)?;
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let document = render_document(&service, &form, format, date)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &document)?;
            println!("Checklist written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&document)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        scenario,
        requirements,
        skip_risk,
    } = args;

    let config = AppConfig::load()?;
    let service = checklist_service(&config, requirements)?;
    let today = Local::now().date_naive();

    println!("Visa checklist demo");
    for demo in scenarios()
        .into_iter()
        .filter(|demo| scenario.as_deref().map_or(true, |key| key == demo.key))
    {
        println!("\n=== {} ({}) ===", demo.title, demo.key);
        let document = render_document(&service, &demo.form, OutputFormat::Text, today)?;
        println!("{}", String::from_utf8_lossy(&document));

        if !skip_risk {
            let assessment = service.assess_risk(&demo.form)?;
            print_risk(&assessment);
        }
    }
    Ok(())
}

fn render_document(
    service: &ChecklistService,
    form: &Value,
    format: OutputFormat,
    generated_on: NaiveDate,
) -> Result<Vec<u8>, AppError> {
    match format.render_format() {
        Some(render) => Ok(service.render(form, render, generated_on)?.body),
        None => {
            let outcome = service.generate(form)?;
            Ok(serde_json::to_vec_pretty(&outcome)?)
        }
    }
}

fn print_risk(assessment: &RiskAssessment) {
    let factors: Vec<&str> = assessment
        .risk_factors
        .iter()
        .map(|factor| factor.label())
        .collect();
    println!(
        "Risk screening: {} (factors: {})",
        if assessment.is_high_risk {
            "high risk"
        } else {
            "standard"
        },
        if factors.is_empty() {
            "none".to_string()
        } else {
            factors.join(", ")
        }
    );
    for note in &assessment.notes {
        println!("  - {note}");
    }
    for material in &assessment.additional_materials {
        println!("  + {material}");
    }
}
