//! Test helpers for the verification service

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::repositories::MockVerificationCodeRepository;
use crate::services::verification::{
    CodeGenerator, MockMailService, VerificationService, VerificationServiceConfig,
};

/// Hands out a fixed list of codes, then repeats the last one
pub struct SequenceCodeGenerator {
    codes: Mutex<VecDeque<String>>,
}

impl SequenceCodeGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
        }
    }
}

impl CodeGenerator for SequenceCodeGenerator {
    fn generate(&self) -> String {
        let mut codes = self.codes.lock().unwrap();
        if codes.len() > 1 {
            codes.pop_front().unwrap()
        } else {
            codes.front().cloned().unwrap()
        }
    }
}

pub type TestService = VerificationService<MockVerificationCodeRepository, MockMailService>;

pub fn create_service(
    config: VerificationServiceConfig,
) -> (TestService, Arc<MockVerificationCodeRepository>, Arc<MockMailService>) {
    let repository = Arc::new(MockVerificationCodeRepository::new());
    let mail_service = Arc::new(MockMailService::new(false));
    let service = VerificationService::new(repository.clone(), mail_service.clone(), config);
    (service, repository, mail_service)
}
