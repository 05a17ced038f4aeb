//! Business logic services

pub mod borrowals;
pub mod email;
pub mod fines;
pub mod overdue;
pub mod preferences;

use crate::{
    config::{BorrowingConfig, EmailConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub borrowals: borrowals::BorrowalsService,
    pub overdue: overdue::OverdueService,
    pub fines: fines::FinesService,
    pub preferences: preferences::PreferencesService,
    pub email: email::EmailService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        borrowing_config: BorrowingConfig,
        email_config: EmailConfig,
    ) -> Self {
        let email = email::EmailService::new(email_config);
        Self {
            borrowals: borrowals::BorrowalsService::new(repository.clone(), borrowing_config),
            overdue: overdue::OverdueService::new(repository.clone(), email.clone()),
            fines: fines::FinesService::new(repository.clone()),
            preferences: preferences::PreferencesService::new(repository.clone()),
            email,
            repository,
        }
    }
}
