use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::cancellation::Cancellation;
use crate::error::{UserError, UserResult};
use crate::logging::{LogArg, LoggerAdapter};
use crate::models::{CreateUserRequest, User};
use crate::repository::UserRepository;
use crate::validation::validate_create_user;

/// Service layer for User business logic.
///
/// Holds no state of its own beyond the two ports, so clones are cheap and
/// calls may run concurrently. Duplicate names are checked with a separate
/// read before the write; two concurrent creates with the same name can both
/// pass the check.
pub struct UserService<R: UserRepository, L: LoggerAdapter> {
    repository: Arc<R>,
    logger: Arc<L>,
}

impl<R: UserRepository, L: LoggerAdapter> Clone for UserService<R, L> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            logger: Arc::clone(&self.logger),
        }
    }
}

impl<R: UserRepository, L: LoggerAdapter> UserService<R, L> {
    pub fn new(repository: R, logger: L) -> Self {
        Self {
            repository: Arc::new(repository),
            logger: Arc::new(logger),
        }
    }

    /// List every user
    pub async fn list_all(&self, cancel: &Cancellation) -> UserResult<Vec<User>> {
        self.logger.log_information("Retrieving all users", &[]);

        let started = Instant::now();
        let result = self.repository.get_all(cancel).await;

        if let Err(err) = &result {
            self.logger
                .log_error(err, "Something went wrong while retrieving all users", &[]);
        }
        self.logger.log_information(
            "All users retrieved in {0}ms",
            &[elapsed_millis(started)],
        );

        result.map_err(UserError::Storage)
    }

    /// Get a user by ID; a missing user is `Ok(None)`
    pub async fn get_by_id(&self, id: Uuid, cancel: &Cancellation) -> UserResult<Option<User>> {
        self.logger
            .log_information("Retrieving user with id : {0}", &[LogArg::Id(id)]);

        let started = Instant::now();
        let result = self.repository.get_by_id(id, cancel).await;

        if let Err(err) = &result {
            self.logger.log_error(
                err,
                "Something went wrong while retrieving user with id : {0}",
                &[LogArg::Id(id)],
            );
        }
        self.logger.log_information(
            "User with id : {0} retrieved in {1}ms",
            &[LogArg::Id(id), elapsed_millis(started)],
        );

        result.map_err(UserError::Storage)
    }

    /// Validate, check the name is free, then persist a new user.
    ///
    /// Returns the repository's success flag.
    pub async fn create(
        &self,
        request: CreateUserRequest,
        cancel: &Cancellation,
    ) -> UserResult<bool> {
        let violations = validate_create_user(&request);
        if !violations.is_empty() {
            return Err(UserError::Validation(violations.join(", ")));
        }

        if self.repository.name_exists(&request.full_name, cancel).await? {
            return Err(UserError::DuplicateName(request.full_name));
        }

        let user = Self::user_from_request(request);
        let id = user.id;

        self.logger.log_information(
            "Creating user with id {0} and name: {1}",
            &[LogArg::Id(id), LogArg::Text(user.full_name.clone())],
        );

        let started = Instant::now();
        let result = self.repository.create(user, cancel).await;

        if let Err(err) = &result {
            self.logger
                .log_error(err, "Something went wrong while creating a user", &[]);
        }
        self.logger.log_information(
            "User with id: {0} created in {1}ms",
            &[LogArg::Id(id), elapsed_millis(started)],
        );

        result.map_err(UserError::Storage)
    }

    /// Delete an existing user by ID.
    ///
    /// Returns the repository's success flag, or `NotFound` when no user has
    /// this ID.
    pub async fn delete_by_id(&self, id: Uuid, cancel: &Cancellation) -> UserResult<bool> {
        let user = self
            .repository
            .get_by_id(id, cancel)
            .await?
            .ok_or(UserError::NotFound(id))?;
        let user_id = user.id;

        self.logger
            .log_information("Deleting user with id : {0}", &[LogArg::Id(user_id)]);

        let started = Instant::now();
        let result = self.repository.delete(user, cancel).await;

        if let Err(err) = &result {
            self.logger
                .log_error(err, "Something went wrong while deleting user", &[]);
        }
        self.logger.log_information(
            "User with id: {0} deleted in {1}ms",
            &[LogArg::Id(user_id), elapsed_millis(started)],
        );

        result.map_err(UserError::Storage)
    }

    /// Build the entity for a create request, minting a fresh ID
    pub fn user_from_request(request: CreateUserRequest) -> User {
        User::new(request.full_name)
    }
}

fn elapsed_millis(started: Instant) -> LogArg {
    LogArg::Millis(u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX))
}
