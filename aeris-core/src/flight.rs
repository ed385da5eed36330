use std::fmt;

use serde::{Deserialize, Serialize};

/// A validated flight number such as "BA101": a two-letter airline code
/// followed by a three- or four-digit route number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightNumber(String);

impl FlightNumber {
    pub fn parse(number: &str) -> Result<Self, FlightNumberError> {
        let code: Vec<char> = number.chars().take(2).collect();
        if code.is_empty() || !code.iter().all(|c| c.is_ascii_uppercase()) {
            return Err(FlightNumberError::InvalidFlightCode {
                number: number.to_string(),
            });
        }

        // A one-letter input has a valid (short) code and an empty route,
        // so it falls through to the route check. The code chars are ASCII,
        // so slicing at their count is a char boundary.
        let route = &number[code.len()..];
        if !(route.len() == 3 || route.len() == 4) || !route.chars().all(|c| c.is_ascii_digit()) {
            return Err(FlightNumberError::InvalidRouteNumber {
                number: number.to_string(),
            });
        }

        Ok(Self(number.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Flight-number validation errors
#[derive(Debug, thiserror::Error)]
pub enum FlightNumberError {
    #[error("Invalid airline code in {number:?}")]
    InvalidFlightCode { number: String },

    #[error("Invalid route number in {number:?}")]
    InvalidRouteNumber { number: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_three_and_four_digit_routes() {
        assert_eq!(FlightNumber::parse("BA101").unwrap().as_str(), "BA101");
        assert_eq!(FlightNumber::parse("SN2614").unwrap().as_str(), "SN2614");
    }

    #[test]
    fn test_rejects_bad_airline_codes() {
        // Lowercase, non-alphabetic, and empty codes all fail the same way
        for number in ["ba101", "Ba101", "1A101", ""] {
            assert!(
                matches!(
                    FlightNumber::parse(number),
                    Err(FlightNumberError::InvalidFlightCode { .. })
                ),
                "expected invalid flight code for {number:?}"
            );
        }
    }

    #[test]
    fn test_rejects_bad_route_numbers() {
        // Too short, too long, and non-numeric suffixes. A single uppercase
        // letter is a valid short code with an empty route, so it lands
        // here rather than failing the code check.
        for number in ["B", "BA", "BA1", "BA12", "BA12345", "BA1O1", "BA101X"] {
            assert!(
                matches!(
                    FlightNumber::parse(number),
                    Err(FlightNumberError::InvalidRouteNumber { .. })
                ),
                "expected invalid route number for {number:?}"
            );
        }
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let number = FlightNumber::parse("BA101").unwrap();

        assert_eq!(serde_json::to_value(&number).unwrap(), "BA101");
        let back: FlightNumber = serde_json::from_str("\"BA101\"").unwrap();
        assert_eq!(back, number);
    }
}
