//! ViaCEP postal-code lookup client.
//!
//! Proxies the public ViaCEP API so browser clients avoid a cross-origin
//! call and the upstream URL stays server-side.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const VIACEP_BASE_URL: &str = "https://viacep.com.br/ws";

/// Errors from a CEP lookup.
#[derive(Debug, Error)]
pub enum ViaCepError {
    /// CEP is not eight digits.
    #[error("invalid CEP: {0}")]
    InvalidCep(String),

    /// CEP is well-formed but unknown to ViaCEP.
    #[error("CEP not found")]
    NotFound,

    /// Upstream request failed.
    #[error("viacep request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Address data returned by ViaCEP, trimmed to the fields the checkout
/// form prefills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CepAddress {
    pub cep: String,
    /// Street name.
    pub logradouro: String,
    /// Neighborhood.
    pub bairro: String,
    /// City.
    pub localidade: String,
    /// State code.
    pub uf: String,
}

#[derive(Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    erro: bool,
    #[serde(default)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

/// ViaCEP lookup client.
pub struct ViaCepClient {
    http: reqwest::Client,
}

impl ViaCepClient {
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Look up an address by CEP. Accepts formatted input ("91787-000")
    /// and strips it down to the eight digits ViaCEP expects.
    ///
    /// # Errors
    ///
    /// Returns `ViaCepError::InvalidCep` for malformed input,
    /// `ViaCepError::NotFound` for unknown codes, and
    /// `ViaCepError::Request` on upstream failure.
    pub async fn lookup(&self, cep: &str) -> Result<CepAddress, ViaCepError> {
        let digits: String = cep.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != 8 {
            return Err(ViaCepError::InvalidCep(cep.to_string()));
        }

        let url = format!("{VIACEP_BASE_URL}/{digits}/json/");
        let response: ViaCepResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.erro {
            return Err(ViaCepError::NotFound);
        }

        Ok(CepAddress {
            cep: response.cep,
            logradouro: response.logradouro,
            bairro: response.bairro,
            localidade: response.localidade,
            uf: response.uf,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_cep_is_normalized() {
        let digits: String = "91787-000".chars().filter(char::is_ascii_digit).collect();
        assert_eq!(digits, "91787000");
    }

    #[test]
    fn short_cep_is_invalid() {
        let client = ViaCepClient::new(reqwest::Client::new());
        let err = futures_executor_block_on(client.lookup("1234"));
        assert!(matches!(err, Err(ViaCepError::InvalidCep(_))));
    }

    // Validation happens before any network I/O, so a throwaway runtime
    // is enough here.
    fn futures_executor_block_on<F: std::future::Future>(fut: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(fut)
    }
}
