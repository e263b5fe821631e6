//! Form requests: loading and parsing into typed solver problems.

use std::collections::BTreeMap;
use std::path::Path;

use rc_core::{AmountUnit, Real, TemperatureUnit, TimeUnit};
use rc_solver::{
    AmountAtTime, CoolingProblem, CoolingQuery, CoolingUnits, ExponentialProblem,
    ExponentialQuery, ExponentialUnits, InitialTemperature, InitialValue, Problem, SolveError,
    TemperatureAtTime, TimeToReach, TimeToTemperature,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::forms::{FieldSpec, FormKind, FormTemplate, UnitField};

/// Raw field value as a host collected it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    /// Anything else (`null`, booleans, lists); always rejected when read.
    Other(serde_json::Value),
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

/// Unit selections; which ones are required depends on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSelection {
    #[serde(rename = "unit-x", default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(rename = "unit-temp", default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
    #[serde(rename = "unit-time", default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// One submitted form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRequest {
    /// Form id, e.g. `find-amount`
    pub form: String,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
    #[serde(default)]
    pub units: UnitSelection,
}

impl FormRequest {
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            fields: BTreeMap::new(),
            units: UnitSelection::default(),
        }
    }

    pub fn field(mut self, id: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(id.into(), value.into());
        self
    }

    pub fn unit(mut self, selector: UnitField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match selector {
            UnitField::Amount => self.units.amount = value,
            UnitField::Temperature => self.units.temperature = value,
            UnitField::Time => self.units.time = value,
        }
        self
    }

    fn lookup(&self, spec: &FieldSpec) -> Option<&FieldValue> {
        self.fields
            .get(spec.id)
            .or_else(|| self.fields.get(spec.key))
    }
}

/// Load a request from a YAML (`.yaml`/`.yml`) or JSON (`.json`) file.
pub fn load_request(path: &Path) -> AppResult<FormRequest> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::RequestFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .map_err(|e| AppError::RequestParse(format!("Failed to parse request JSON: {}", e)))
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::RequestParse(format!("Failed to parse request YAML: {}", e)))
    }
}

fn invalid(field: &str, reason: &str) -> AppError {
    SolveError::InvalidInput {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

fn read_field(request: &FormRequest, spec: &FieldSpec) -> AppResult<Real> {
    let value = match request.lookup(spec) {
        None => return Err(invalid(spec.id, "missing")),
        Some(FieldValue::Number(v)) => *v,
        Some(FieldValue::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(invalid(spec.id, "empty"));
            }
            text.parse::<Real>()
                .map_err(|_| invalid(spec.id, "not a number"))?
        }
        Some(FieldValue::Other(_)) => return Err(invalid(spec.id, "not a number")),
    };
    if !value.is_finite() {
        return Err(invalid(spec.id, "not finite"));
    }
    Ok(value)
}

/// Read every numeric field of `template`, in template order.
fn read_fields<const N: usize>(
    request: &FormRequest,
    template: &FormTemplate,
) -> AppResult<[Real; N]> {
    debug_assert_eq!(template.fields.len(), N, "{}", template.id);
    let mut out = [0.0; N];
    for (slot, spec) in out.iter_mut().zip(template.fields) {
        *slot = read_field(request, spec)?;
    }
    Ok(out)
}

fn selected<'a>(value: &'a Option<String>, selector: UnitField) -> AppResult<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(invalid(selector.id(), "no unit selected")),
    }
}

fn exponential_units(request: &FormRequest) -> AppResult<ExponentialUnits> {
    let amount = AmountUnit::new(selected(&request.units.amount, UnitField::Amount)?)?;
    let time = selected(&request.units.time, UnitField::Time)?.parse::<TimeUnit>()?;
    Ok(ExponentialUnits { amount, time })
}

fn cooling_units(request: &FormRequest) -> AppResult<CoolingUnits> {
    let temperature = selected(&request.units.temperature, UnitField::Temperature)?
        .parse::<TemperatureUnit>()?;
    let time = selected(&request.units.time, UnitField::Time)?.parse::<TimeUnit>()?;
    Ok(CoolingUnits { temperature, time })
}

/// Turn a submitted form into a typed problem.
///
/// Numeric fields are checked first, in form order, so the reported field is
/// the first offending one; unit selections are checked after.
pub fn parse_request(request: &FormRequest) -> AppResult<Problem> {
    let kind: FormKind = request.form.parse()?;
    let template = kind.template();

    let problem: Problem = match kind {
        FormKind::FindAmount => {
            let [x0, t1, x1, t2] = read_fields::<4>(request, template)?;
            ExponentialProblem {
                query: ExponentialQuery::AmountAtTime(AmountAtTime { x0, t1, x1, t2 }),
                units: exponential_units(request)?,
            }
            .into()
        }
        FormKind::FindInitial => {
            let [x1, t1, x2, t2] = read_fields::<4>(request, template)?;
            ExponentialProblem {
                query: ExponentialQuery::InitialValue(InitialValue { x1, t1, x2, t2 }),
                units: exponential_units(request)?,
            }
            .into()
        }
        FormKind::FindTime => {
            let [x0, x1, t1, x2] = read_fields::<4>(request, template)?;
            ExponentialProblem {
                query: ExponentialQuery::TimeToReach(TimeToReach { x0, x1, t1, x2 }),
                units: exponential_units(request)?,
            }
            .into()
        }
        FormKind::FindTemp => {
            let [ambient, initial, t1, temp1, t2] = read_fields::<5>(request, template)?;
            CoolingProblem {
                query: CoolingQuery::TemperatureAtTime(TemperatureAtTime {
                    ambient,
                    initial,
                    t1,
                    temp1,
                    t2,
                }),
                units: cooling_units(request)?,
            }
            .into()
        }
        FormKind::FindInitialTemp => {
            let [ambient, temp1, t1, temp2, t2] = read_fields::<5>(request, template)?;
            CoolingProblem {
                query: CoolingQuery::InitialTemperature(InitialTemperature {
                    ambient,
                    t1,
                    temp1,
                    t2,
                    temp2,
                }),
                units: cooling_units(request)?,
            }
            .into()
        }
        FormKind::FindTimeToTemp => {
            let [ambient, initial, known_temp, known_time, target] =
                read_fields::<5>(request, template)?;
            CoolingProblem {
                query: CoolingQuery::TimeToReach(TimeToTemperature {
                    ambient,
                    initial,
                    known_time,
                    known_temp,
                    target,
                }),
                units: cooling_units(request)?,
            }
            .into()
        }
    };
    Ok(problem)
}
