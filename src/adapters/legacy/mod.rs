//! Outbound integration with the legacy WebAlgo host.
//!
//! Every legacy endpoint is a form-encoded POST that authenticates via the
//! `sessionid` and `name` cookies and answers with JSON whose keys are
//! abbreviated Portuguese tokens. The clients here translate commands to that
//! wire format and funnel raw responses through the pure mappers; they perform
//! no business validation.

pub mod problem;
pub mod solution;
pub mod wire;

pub use problem::LegacyProblemClient;
pub use solution::LegacySolutionClient;

use crate::domain::model::Session;
use crate::utils::error::Result;
use reqwest::header;
use serde::de::DeserializeOwned;

fn session_cookie(session: &Session) -> String {
    format!("sessionid={}; name={}", session.session_id, session.username)
}

/// POSTs a form to a legacy endpoint and decodes the JSON body. Shared by both
/// clients; one outbound call per invocation, no retries, default timeouts.
pub(crate) async fn post_form<T: DeserializeOwned>(
    client: &reqwest::Client,
    base_url: &str,
    path: &str,
    form: &[(&str, &str)],
    session: &Session,
) -> Result<T> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), path);

    tracing::debug!(%url, "posting form to legacy endpoint");
    let response = client
        .post(&url)
        .header(header::ACCEPT, "application/json")
        .header(header::COOKIE, session_cookie(session))
        .form(form)
        .send()
        .await?
        .error_for_status()?;

    tracing::debug!(status = %response.status(), %url, "legacy response received");
    Ok(response.json::<T>().await?)
}
