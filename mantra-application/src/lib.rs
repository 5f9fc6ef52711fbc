pub mod password_hash;
pub mod use_cases;

pub use password_hash::{compute_password_hash, verify_password_hash};

pub use use_cases::{
    activate::{ActivateError, ActivateUseCase},
    delete_user::{DeleteUserError, DeleteUserUseCase},
    forgot_password::{ForgotPasswordError, ForgotPasswordUseCase},
    login::{LoginError, LoginUseCase},
    refresh_access_token::{RefreshAccessTokenError, RefreshAccessTokenUseCase},
    register::{RegisterError, RegisterUseCase},
    reset_password::{ResetPasswordError, ResetPasswordUseCase},
};
