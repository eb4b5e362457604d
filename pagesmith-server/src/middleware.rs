use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::{USER_EMAIL_HEADER, USER_NAME_HEADER};

use crate::error::ApiError;

/// User asserted by the identity provider sitting in front of the server.
///
/// The provider terminates the session and forwards the verified e-mail in
/// `x-user-email`; requests without it are anonymous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub email: String,
    pub name: Option<String>,
}

impl CurrentUser {
    pub fn from_parts(parts: &Parts) -> Option<Self> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(ToString::to_string)
        };

        Some(Self {
            email: header(USER_EMAIL_HEADER)?,
            name: header(USER_NAME_HEADER),
        })
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        CurrentUser::from_parts(parts).ok_or(ApiError::Unauthorized)
    }
}

/// Like [`CurrentUser`] but never rejects.
#[derive(Debug, Clone, Default)]
pub struct MaybeUser(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(CurrentUser::from_parts(parts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/api/users");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn reads_email_and_optional_name() {
        let user = CurrentUser::from_parts(&parts(&[
            (USER_EMAIL_HEADER, "ada@example.com"),
            (USER_NAME_HEADER, "Ada"),
        ]))
        .unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn blank_email_is_anonymous() {
        assert!(CurrentUser::from_parts(&parts(&[(USER_EMAIL_HEADER, "  ")])).is_none());
        assert!(CurrentUser::from_parts(&parts(&[])).is_none());
    }
}
