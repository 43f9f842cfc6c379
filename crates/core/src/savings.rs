//! Savings estimate for the calculator section
//!
//! The website's calculator estimates monthly and annual savings from a
//! process profile and a few workload figures, then auto-saves the result as
//! a calculator submission. This module holds that arithmetic so the server
//! can compute the same figures.
//!
//! ```text
//! currentCost       = laborCost + tasksPerDay * workingDays * 0.5
//! monthlySavings    = currentCost - aiCost
//! percentageSavings = round(monthlySavings / currentCost * 100), halves toward +inf
//! annualSavings     = monthlySavings * 12
//! ```

use crate::error::IntakeResult;
use crate::record::NewCalculatorSubmission;
use crate::types::EntityKind;
use crate::validation::{as_object, number, optional_bool, reject, FieldIssue, Problem};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-task processing cost folded into the current monthly cost
const COST_PER_TASK: f64 = 0.5;

/// Months per year
const MONTHS: f64 = 12.0;

/// Kind of process being automated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessKind {
    /// Workflow automation
    #[default]
    Workflow,
    /// Document and data processing
    Document,
    /// Customer support automation
    Customer,
    /// Sales and lead automation
    Sales,
    /// Custom project
    Custom,
}

/// Static pricing profile of a process kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessProfile {
    /// Display name
    pub name: &'static str,
    /// Monthly cost of the automated process
    pub ai_cost: f64,
    /// Expected efficiency gain, 0..1
    pub efficiency: f64,
}

impl ProcessKind {
    /// All process kinds
    pub const ALL: [ProcessKind; 5] = [
        ProcessKind::Workflow,
        ProcessKind::Document,
        ProcessKind::Customer,
        ProcessKind::Sales,
        ProcessKind::Custom,
    ];

    /// Pricing profile for this kind
    pub fn profile(&self) -> ProcessProfile {
        match self {
            ProcessKind::Workflow => ProcessProfile {
                name: "Workflow Automation",
                ai_cost: 330.0,
                efficiency: 0.84,
            },
            ProcessKind::Document => ProcessProfile {
                name: "Document/Data Processing",
                ai_cost: 264.0,
                efficiency: 0.87,
            },
            ProcessKind::Customer => ProcessProfile {
                name: "Customer Support Automation",
                ai_cost: 396.0,
                efficiency: 0.80,
            },
            ProcessKind::Sales => ProcessProfile {
                name: "Sales/Lead Automation",
                ai_cost: 495.0,
                efficiency: 0.75,
            },
            ProcessKind::Custom => ProcessProfile {
                name: "Custom Project",
                ai_cost: 450.0,
                efficiency: 0.78,
            },
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        ProcessKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == raw)
    }

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessKind::Workflow => "workflow",
            ProcessKind::Document => "document",
            ProcessKind::Customer => "customer",
            ProcessKind::Sales => "sales",
            ProcessKind::Custom => "custom",
        }
    }
}

/// Workload figures entered in the calculator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsInput {
    /// Process being automated
    pub process: ProcessKind,
    /// Current monthly labor cost
    pub labor_cost: f64,
    /// Tasks handled per day
    pub tasks_per_day: f64,
    /// Working days per month
    pub working_days: f64,
}

/// Computed savings figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsEstimate {
    /// Process the estimate was computed for
    pub process: ProcessKind,
    /// Process display name
    pub process_name: &'static str,
    /// Current monthly cost
    #[serde(serialize_with = "crate::record::number::serialize")]
    pub current_cost: f64,
    /// Monthly cost of the automated process
    #[serde(serialize_with = "crate::record::number::serialize")]
    pub ai_cost: f64,
    /// Monthly savings (may be negative)
    #[serde(serialize_with = "crate::record::number::serialize")]
    pub monthly_savings: f64,
    /// Savings as a rounded percentage of current cost
    #[serde(serialize_with = "crate::record::number::serialize")]
    pub percentage_savings: f64,
    /// Annual savings
    #[serde(serialize_with = "crate::record::number::serialize")]
    pub annual_savings: f64,
    /// Expected efficiency gain of the process
    pub efficiency: f64,
    #[serde(skip)]
    labor_cost: f64,
    #[serde(skip)]
    tasks_per_day: f64,
    #[serde(skip)]
    working_days: f64,
}

impl SavingsInput {
    /// Compute the estimate
    pub fn estimate(&self) -> SavingsEstimate {
        let profile = self.process.profile();
        let current_cost = self.labor_cost + self.tasks_per_day * self.working_days * COST_PER_TASK;
        let monthly_savings = current_cost - profile.ai_cost;
        let percentage_savings = if current_cost == 0.0 {
            0.0
        } else {
            // halves round toward +inf
            (monthly_savings / current_cost * 100.0 + 0.5).floor()
        };

        SavingsEstimate {
            process: self.process,
            process_name: profile.name,
            current_cost,
            ai_cost: profile.ai_cost,
            monthly_savings,
            percentage_savings,
            annual_savings: monthly_savings * MONTHS,
            efficiency: profile.efficiency,
            labor_cost: self.labor_cost,
            tasks_per_day: self.tasks_per_day,
            working_days: self.working_days,
        }
    }
}

impl SavingsEstimate {
    /// The calculator submission the website records for this estimate
    ///
    /// Tasks per day travel in the `operationalCost` column.
    pub fn to_submission(&self) -> NewCalculatorSubmission {
        NewCalculatorSubmission {
            labor_cost: self.labor_cost,
            operational_cost: self.tasks_per_day,
            working_days: self.working_days,
            monthly_savings: self.monthly_savings,
            annual_savings: self.annual_savings,
        }
    }
}

/// Parsed body of an estimate request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateRequest {
    /// Workload figures
    pub input: SavingsInput,
    /// Also record the derived calculator submission
    pub save: bool,
}

impl EstimateRequest {
    /// Validate a raw estimate payload
    ///
    /// `process` is optional and defaults to workflow; `save` defaults to
    /// false. Failures classify as calculator validation errors.
    pub fn from_payload(payload: &Value) -> IntakeResult<Self> {
        estimate_fields(payload).map_err(|issue| reject(EntityKind::Calculator, issue))
    }
}

fn estimate_fields(payload: &Value) -> Result<EstimateRequest, FieldIssue> {
    let obj = as_object(payload)?;
    let process = match obj.get("process") {
        None | Some(Value::Null) => ProcessKind::default(),
        Some(Value::String(raw)) => ProcessKind::parse(raw).ok_or(FieldIssue {
            field: "process",
            problem: Problem::UnknownValue,
        })?,
        Some(_) => {
            return Err(FieldIssue {
                field: "process",
                problem: Problem::NotAString,
            })
        }
    };

    Ok(EstimateRequest {
        input: SavingsInput {
            process,
            labor_cost: number(obj, "laborCost")?,
            tasks_per_day: number(obj, "tasksPerDay")?,
            working_days: number(obj, "workingDays")?,
        },
        save: optional_bool(obj, "save")?,
    })
}
