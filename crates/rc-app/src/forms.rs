//! Form templates: which fields each calculation asks for.
//!
//! Presentation lives with the host; these templates only pin down field ids,
//! labels and the unit selectors so every front end agrees on the contract.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Calculator family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculator {
    GrowthDecay,
    HeatCool,
}

impl Calculator {
    pub fn id(self) -> &'static str {
        match self {
            Calculator::GrowthDecay => "growth-decay",
            Calculator::HeatCool => "heat-cool",
        }
    }

    pub fn forms(self) -> &'static [FormKind] {
        match self {
            Calculator::GrowthDecay => &[
                FormKind::FindAmount,
                FormKind::FindInitial,
                FormKind::FindTime,
            ],
            Calculator::HeatCool => &[
                FormKind::FindTemp,
                FormKind::FindInitialTemp,
                FormKind::FindTimeToTemp,
            ],
        }
    }
}

/// One of the six calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    FindAmount,
    FindInitial,
    FindTime,
    FindTemp,
    FindInitialTemp,
    FindTimeToTemp,
}

impl FormKind {
    pub const ALL: [FormKind; 6] = [
        FormKind::FindAmount,
        FormKind::FindInitial,
        FormKind::FindTime,
        FormKind::FindTemp,
        FormKind::FindInitialTemp,
        FormKind::FindTimeToTemp,
    ];

    pub fn id(self) -> &'static str {
        self.template().id
    }

    pub fn calculator(self) -> Calculator {
        match self {
            FormKind::FindAmount | FormKind::FindInitial | FormKind::FindTime => {
                Calculator::GrowthDecay
            }
            _ => Calculator::HeatCool,
        }
    }

    pub fn template(self) -> &'static FormTemplate {
        match self {
            FormKind::FindAmount => &FIND_AMOUNT,
            FormKind::FindInitial => &FIND_INITIAL,
            FormKind::FindTime => &FIND_TIME,
            FormKind::FindTemp => &FIND_TEMP,
            FormKind::FindInitialTemp => &FIND_INITIAL_TEMP,
            FormKind::FindTimeToTemp => &FIND_TIME_TO_TEMP,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FormKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FormKind::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::UnknownForm(s.to_string()))
    }
}

/// A numeric input on a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Form field id, e.g. `initial-value`
    pub id: &'static str,
    /// Short algebraic key accepted as an alias, e.g. `x0`
    pub key: &'static str,
    pub label: &'static str,
}

/// A unit selector on a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitField {
    Amount,
    Temperature,
    Time,
}

impl UnitField {
    pub fn id(self) -> &'static str {
        match self {
            UnitField::Amount => "unit-x",
            UnitField::Temperature => "unit-temp",
            UnitField::Time => "unit-time",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UnitField::Amount => "Unit of Measurement",
            UnitField::Temperature => "Temperature Unit",
            UnitField::Time => "Time Unit",
        }
    }

    /// Options offered in the selector. Amount labels are free-form, so that
    /// list is only a suggestion.
    pub fn options(self) -> Vec<&'static str> {
        match self {
            UnitField::Amount => AMOUNT_UNIT_SUGGESTIONS.to_vec(),
            UnitField::Temperature => rc_core::TemperatureUnit::ALL.map(|u| u.name()).to_vec(),
            UnitField::Time => rc_core::TimeUnit::ALL.map(|u| u.name()).to_vec(),
        }
    }
}

pub const AMOUNT_UNIT_SUGGESTIONS: [&str; 8] = [
    "kg",
    "g",
    "mg",
    "population",
    "count",
    "dollars",
    "euros",
    "units",
];

#[derive(Debug)]
pub struct FormTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldSpec],
    pub units: [UnitField; 2],
}

const fn field(id: &'static str, key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { id, key, label }
}

static FIND_AMOUNT: FormTemplate = FormTemplate {
    id: "find-amount",
    title: "Determine the amount of growth or decay at a given time (t)",
    description: "Calculate the amount at a specific time given initial value and an intermediate point",
    fields: &[
        field("initial-value", "x0", "Initial Value (x₀)"),
        field("time1", "t1", "Time at First Point (t₁)"),
        field("amount1", "x1", "Amount at First Point (x₁)"),
        field("time2", "t2", "Target Time (t₂)"),
    ],
    units: [UnitField::Amount, UnitField::Time],
};

static FIND_INITIAL: FormTemplate = FormTemplate {
    id: "find-initial",
    title: "Determine the initial value (x₀)",
    description: "Calculate the initial value given two points on the curve",
    fields: &[
        field("amount1", "x1", "First Amount (x₁)"),
        field("time1", "t1", "First Time Point (t₁)"),
        field("amount2", "x2", "Second Amount (x₂)"),
        field("time2", "t2", "Second Time Point (t₂)"),
    ],
    units: [UnitField::Amount, UnitField::Time],
};

static FIND_TIME: FormTemplate = FormTemplate {
    id: "find-time",
    title: "Determine the time (t) for a given amount of x",
    description: "Calculate the time needed to reach a target amount",
    fields: &[
        field("initial-value", "x0", "Initial Value (x₀)"),
        field("amount1", "x1", "Known Amount (x₁)"),
        field("time1", "t1", "Time at Known Point (t₁)"),
        field("target-amount", "x2", "Target Amount (x₂)"),
    ],
    units: [UnitField::Amount, UnitField::Time],
};

static FIND_TEMP: FormTemplate = FormTemplate {
    id: "find-temp",
    title: "Determine temperature at time",
    description: "Calculate temperature at a specific time given initial and ambient temperatures",
    fields: &[
        field("ambient-temp", "ta", "Ambient Temperature (T∞)"),
        field("initial-temp", "t0", "Initial Temperature (T₀)"),
        field("time1", "t1", "Time at Known Point (t₁)"),
        field("temp1", "t1Val", "Temperature at Known Point (T₁)"),
        field("time2", "t2", "Target Time (t₂)"),
    ],
    units: [UnitField::Temperature, UnitField::Time],
};

static FIND_INITIAL_TEMP: FormTemplate = FormTemplate {
    id: "find-initial-temp",
    title: "Determine initial temperature",
    description: "Calculate initial temperature given ambient temperature and two points",
    fields: &[
        field("ambient-temp", "ta", "Ambient Temperature (T∞)"),
        field("temp1", "t1Val", "First Temperature (T₁)"),
        field("time1", "t1", "First Time Point (t₁)"),
        field("temp2", "t2Val", "Second Temperature (T₂)"),
        field("time2", "t2", "Second Time Point (t₂)"),
    ],
    units: [UnitField::Temperature, UnitField::Time],
};

static FIND_TIME_TO_TEMP: FormTemplate = FormTemplate {
    id: "find-time-to-temp",
    title: "Determine time to reach temperature",
    description: "Calculate time needed to reach a target temperature",
    fields: &[
        field("ambient-temp", "ta", "Ambient Temperature (T∞)"),
        field("initial-temp", "t0", "Initial Temperature (T₀)"),
        field("known-temp1", "knownTemp1", "Known Temperature (T₁)"),
        field("known-time1", "knownTime1", "Time at Known Point (t₁)"),
        field("target-temp", "targetTemp", "Target Temperature (T₂)"),
    ],
    units: [UnitField::Temperature, UnitField::Time],
};
