//! Form-driven calculator endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Bad input renders a Failure page with the reason — the calculator form
//! is the caller and has nowhere better to show it. Division by zero is an
//! input error like the others, not a crash.

#[cfg(test)]
#[path = "calc_test.rs"]
mod calc_test;

use axum::extract::Query;
use axum::response::Html;
use serde::Deserialize;

use crate::routes::cgi::escape_html;

#[derive(Debug, Deserialize)]
pub struct CalcParams {
    pub n1: Option<String>,
    pub op: Option<String>,
    pub n2: Option<String>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("Please enter all required fields.")]
    MissingField,
    #[error("Please enter valid integers.")]
    InvalidInteger,
    #[error("Invalid operator.")]
    InvalidOperator,
    #[error("Division by zero.")]
    DivisionByZero,
}

/// Evaluate one `n1 op n2` form submission into a result message.
pub(crate) fn evaluate(n1: &str, op: &str, n2: &str) -> Result<String, CalcError> {
    if n1.is_empty() || op.is_empty() || n2.is_empty() {
        return Err(CalcError::MissingField);
    }
    let a: i64 = n1.parse().map_err(|_| CalcError::InvalidInteger)?;
    let b: i64 = n2.parse().map_err(|_| CalcError::InvalidInteger)?;
    let (symbol, answer) = match op {
        "add" => ("+", (a + b).to_string()),
        "sub" => ("-", (a - b).to_string()),
        "mul" => ("*", (a * b).to_string()),
        "div" => {
            if b == 0 {
                return Err(CalcError::DivisionByZero);
            }
            ("/", (a as f64 / b as f64).to_string())
        }
        _ => return Err(CalcError::InvalidOperator),
    };
    Ok(format!("{a} {symbol} {b} = {answer}"))
}

/// Render the result page; `message` is escaped before interpolation.
pub(crate) fn calc_page(title: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><title>{}</title></head>\n<body>\n\
         <p>{}</p>\n<a href=\"/calc.html\">Go back to calculator</a>\n</body>\n</html>\n",
        escape_html(title),
        escape_html(message)
    )
}

/// `GET /cgi-bin/calculator?n1=&op=&n2=` — evaluate the form and render a
/// Success or Failure page.
pub async fn calculator(Query(params): Query<CalcParams>) -> Html<String> {
    let n1 = params.n1.as_deref().unwrap_or_default();
    let op = params.op.as_deref().unwrap_or_default();
    let n2 = params.n2.as_deref().unwrap_or_default();
    let page = match evaluate(n1, op, n2) {
        Ok(message) => calc_page("Success", &message),
        Err(err) => calc_page("Failure", &err.to_string()),
    };
    Html(page)
}
