//! Solve submitted forms and render the results for a host.

use std::path::Path;

use rc_solver::Solution;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::request::{FormRequest, load_request, parse_request};

/// Parse and solve one request.
///
/// Either the whole solution comes back or an error does; a failed request
/// never yields partial derivation lines.
pub fn solve_request(request: &FormRequest) -> AppResult<Solution> {
    let problem = parse_request(request).inspect_err(|e| {
        warn!(form = %request.form, field = e.field(), error = %e, "request rejected");
    })?;
    let solution = rc_solver::solve(&problem)?;
    info!(
        form = %request.form,
        value = solution.value,
        unit = %solution.unit,
        trend = solution.trend.label(),
        "request solved"
    );
    Ok(solution)
}

/// Load a request file and solve it.
pub fn solve_file(path: &Path) -> AppResult<Solution> {
    let request = load_request(path)?;
    solve_request(&request)
}

/// Plain-text rendering: the derivation, one line per step.
pub fn render_text(solution: &Solution) -> String {
    solution.derivation.to_string()
}

/// JSON rendering of the full solution.
pub fn render_json(solution: &Solution) -> AppResult<String> {
    serde_json::to_string_pretty(solution)
        .map_err(|e| AppError::Output(format!("Failed to serialize solution: {}", e)))
}
