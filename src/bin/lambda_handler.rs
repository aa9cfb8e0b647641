//! AWS Lambda handler for premium-versus-investment simulations
//!
//! Accepts the simulation inputs as JSON and returns the projection, the
//! break-even bracket and the text digest used for explanations.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use premium_breakeven::simulation::{DEFAULT_ANNUAL_RATE, DEFAULT_HORIZONS};
use premium_breakeven::{
    simulate, BreakEven, ExplanationContext, RiskStat, SimulationError, SimulationInput,
    SimulationPoint,
};

/// Input for one simulation
#[derive(Debug, Deserialize)]
pub struct SimulationRequest {
    pub monthly_premium: f64,

    pub benefit_amount: f64,

    /// Annual investment return in percent (default: 5)
    #[serde(default = "default_rate_pct")]
    pub annual_rate_pct: f64,

    /// Horizon checkpoints in years (default: 3, 5, 10, ..., 40)
    #[serde(default = "default_horizons")]
    pub horizons: Vec<u32>,

    /// Population statistic to include in the explanation digest
    #[serde(default)]
    pub risk: Option<RiskStat>,
}

fn default_rate_pct() -> f64 { DEFAULT_ANNUAL_RATE * 100.0 }
fn default_horizons() -> Vec<u32> { DEFAULT_HORIZONS.to_vec() }

/// Output from the simulation
#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    pub points: Vec<SimulationPoint>,
    pub break_even: Option<BreakEven>,
    pub summary_lines: Vec<String>,
    pub break_even_text: String,
    pub risk_text: String,
    pub execution_time_us: u64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

fn cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let response = cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?;
    Ok(response)
}

fn error_response(status: u16, error: String, field: Option<String>) -> Result<Response<Body>, Error> {
    json_response(status, &ErrorBody { error, field })
}

/// Run one request end to end
fn respond(request: SimulationRequest) -> Result<SimulationResponse, SimulationError> {
    let start = std::time::Instant::now();

    let input = SimulationInput::from_percent_rate(
        request.monthly_premium,
        request.benefit_amount,
        request.annual_rate_pct,
        request.horizons,
    )?;
    if let Some(risk) = &request.risk {
        risk.check_consistency().map_err(|reason| SimulationError::invalid("risk", reason))?;
    }

    let simulation = simulate(&input);
    let context = ExplanationContext::new(&input, &simulation, request.risk)
        .with_annual_rate_pct(request.annual_rate_pct);

    Ok(SimulationResponse {
        summary_lines: context.summary_lines(),
        break_even_text: context.break_even_text(),
        risk_text: context.risk_text(),
        points: simulation.result.into_points(),
        break_even: simulation.break_even,
        execution_time_us: start.elapsed().as_micros() as u64,
    })
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: SimulationRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            warn!("Rejected request body: {}", e);
            return error_response(400, format!("Invalid JSON: {}", e), None);
        }
    };

    match respond(request) {
        Ok(response) => {
            info!(
                "Simulated {} horizons in {}us, break-even {:?}",
                response.points.len(),
                response.execution_time_us,
                response.break_even,
            );
            json_response(200, &response)
        }
        Err(e) => {
            warn!("Rejected simulation input: {}", e);
            error_response(400, e.to_string(), Some(e.field().to_string()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> SimulationRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let req = request(r#"{"monthly_premium": 3000, "benefit_amount": 1000000}"#);
        assert_eq!(req.horizons, DEFAULT_HORIZONS.to_vec());
        assert_eq!(req.annual_rate_pct, 5.0);
        assert!(req.risk.is_none());
    }

    #[test]
    fn test_respond_reference_case() {
        let resp = respond(request(r#"{"monthly_premium": 3000, "benefit_amount": 1000000}"#)).unwrap();
        assert_eq!(resp.points.len(), 9);
        let be = resp.break_even.unwrap();
        assert_eq!((be.from_year, be.to_year), (10, 15));
        assert_eq!(resp.summary_lines.len(), 9);
        assert!(resp.break_even_text.contains("12.5"));
    }

    #[test]
    fn test_respond_rejects_invalid_input() {
        let err = respond(request(
            r#"{"monthly_premium": 3000, "benefit_amount": 1000000, "horizons": [10, 5]}"#,
        ))
        .unwrap_err();
        assert_eq!(err.field(), "horizons");
    }

    #[test]
    fn test_respond_rejects_inconsistent_risk() {
        let err = respond(request(
            r#"{"monthly_premium": 3000, "benefit_amount": 1000000,
                "risk": {"risk_type": "cancer", "sex": "male", "age_from": 49, "age_to": 40,
                         "annual_prob": 0.002, "lifetime_prob": null, "note": null,
                         "source_name": null, "source_url": null}}"#,
        ))
        .unwrap_err();
        assert_eq!(err.field(), "risk");

        let err = respond(request(
            r#"{"monthly_premium": 3000, "benefit_amount": 1000000,
                "risk": {"risk_type": "cancer", "sex": "male", "age_from": 40, "age_to": 49,
                         "annual_prob": 1.7, "lifetime_prob": null, "note": null,
                         "source_name": null, "source_url": null}}"#,
        ))
        .unwrap_err();
        assert_eq!(err.field(), "risk");
    }

    #[test]
    fn test_respond_accepts_valid_risk() {
        let resp = respond(request(
            r#"{"monthly_premium": 3000, "benefit_amount": 1000000, "annual_rate_pct": 7,
                "risk": {"risk_type": "cancer", "sex": "female", "age_from": 40, "age_to": 49,
                         "annual_prob": 0.003, "lifetime_prob": 0.5, "note": null,
                         "source_name": "Registry", "source_url": null}}"#,
        ))
        .unwrap();
        assert!(resp.risk_text.starts_with("For women aged 40 to 49"));
        assert!(resp.risk_text.contains("(source: Registry)"));
    }
}
