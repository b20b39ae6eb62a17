use quoteboard_errors::AppError;

const HASH_COST: u32 = 10;

pub fn hash(plain: &str) -> Result<String, AppError> {
    bcrypt::hash(plain, HASH_COST).map_err(|e| AppError::Internal(e.to_string()))
}

pub fn verify(plain: &str, hashed: &str) -> Result<bool, AppError> {
    bcrypt::verify(plain, hashed).map_err(|e| AppError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_original_password_and_rejects_others() {
        let hashed = hash("hunter2").unwrap();
        assert_ne!(hashed, "hunter2");
        assert!(verify("hunter2", &hashed).unwrap());
        assert!(!verify("hunter3", &hashed).unwrap());
    }

    #[test]
    fn garbage_hash_input_is_an_error_not_a_panic() {
        assert!(verify("hunter2", "not-a-bcrypt-hash").is_err());
    }
}
