//! # ユースケース層
//!
//! ハンドラから呼ばれるユースケースのトレイトと、そのインメモリ実装。
//!
//! ハンドラはトレイト（`Arc<dyn XxxUseCase>`）だけに依存し、実装は
//! [`crate::app_builder`] で組み立てる。失敗は [`crate::error::Failure`] で返す。

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod order;
mod password;
pub mod review;
pub mod store;
pub mod user;

pub use auth::{
    AuthUseCase,
    AuthUseCaseImpl,
    LoginInput,
    RefreshInput,
    RegisterInput,
    SessionAuthUtil,
    TokenPair,
};
pub use cart::{AddCartInput, CartUseCase, CartUseCaseImpl, UpdateCartInput};
pub use catalog::{
    MenuQuery,
    MenuUseCase,
    MenuUseCaseImpl,
    PaymentUseCase,
    PaymentUseCaseImpl,
    PromotionUseCase,
    PromotionUseCaseImpl,
};
pub use order::{CreateOrderInput, OrderUseCase, OrderUseCaseImpl};
pub use review::{CreateReviewInput, ReviewUseCase, ReviewUseCaseImpl};
pub use user::{UpdateProfileInput, UserUseCase, UserUseCaseImpl};
