//! Local registration.
//!
//! The credential service has no sign-up endpoint, so a registration is
//! answered locally with a random id and a timestamp token.

use gomate_types::{LoginResponse, RegisterRequest};
use rand::Rng;

/// Prefix of locally issued tokens.
pub const LOCAL_TOKEN_PREFIX: &str = "mock-token-";

/// Build the response a registration would have returned.
///
/// `now_millis` is the Unix time in milliseconds used for the token.
pub fn synthesize_registration<R: Rng + ?Sized>(
    request: &RegisterRequest,
    rng: &mut R,
    now_millis: u128,
) -> LoginResponse {
    LoginResponse {
        id: rng.gen_range(0..1000),
        username: request.username.clone(),
        email: request.email.clone(),
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        token: format!("{}{}", LOCAL_TOKEN_PREFIX, now_millis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn request() -> RegisterRequest {
        RegisterRequest {
            username: "newbie".into(),
            email: "newbie@example.com".into(),
            first_name: "New".into(),
            last_name: "Bie".into(),
            password: "secret1".into(),
        }
    }

    #[test]
    fn copies_profile_fields() {
        let response = synthesize_registration(&request(), &mut StdRng::seed_from_u64(1), 0);
        assert_eq!(response.username, "newbie");
        assert_eq!(response.email, "newbie@example.com");
        assert_eq!(response.first_name, "New");
        assert_eq!(response.last_name, "Bie");
    }

    #[test]
    fn token_carries_timestamp() {
        let response =
            synthesize_registration(&request(), &mut StdRng::seed_from_u64(1), 1_700_000_000_123);
        assert_eq!(response.token, "mock-token-1700000000123");
    }

    #[test]
    fn id_below_one_thousand() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            assert!(synthesize_registration(&request(), &mut rng, 0).id < 1000);
        }
    }
}
