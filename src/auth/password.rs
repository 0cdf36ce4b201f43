//! One-way hash + verify. bcrypt is CPU-bound, so both operations run on the
//! blocking pool rather than stalling the request executor.

use bcrypt::DEFAULT_COST;

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("password hashing task was cancelled")]
    Cancelled(#[from] tokio::task::JoinError),
}

pub async fn hash(password: String) -> Result<String, PasswordError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, DEFAULT_COST)).await??;
    Ok(hashed)
}

pub async fn verify(password: String, hash: String) -> Result<bool, PasswordError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify_round_trips() {
        let hashed = hash("hunter2".to_string()).await.unwrap();

        assert_ne!(hashed, "hunter2");
        assert!(verify("hunter2".to_string(), hashed.clone()).await.unwrap());
        assert!(!verify("hunter3".to_string(), hashed).await.unwrap());
    }
}
