//! # ルートテーブル
//!
//! [`RouterConfig`] からルーターを組み立てる。グローバルな状態は持たず、
//! 同じ設定から何度でも同じルーターを構築できる。
//!
//! ## ルート
//!
//! | メソッド | パス | 認証 |
//! |---------|------|------|
//! | GET | `/ping` | 不要 |
//! | POST | `/api/v1/login`, `/api/v1/register` | 不要 |
//! | GET | `/api/v1/menus`, `/api/v1/promotions` | 不要 |
//! | POST | `/api/v1/logout`, `/api/v1/refresh` | 必要 |
//! | GET, POST | `/api/v1/users/me` | 必要 |
//! | GET, POST, DELETE | `/api/v1/carts` | 必要 |
//! | POST, DELETE | `/api/v1/carts/{cartId}` | 必要 |
//! | GET, POST | `/api/v1/orders` | 必要 |
//! | GET | `/api/v1/orders/payment` | 必要 |
//! | POST | `/api/v1/orders/reviews` | 必要 |
//!
//! 上記以外のパス、および定義済みパスへの未定義メソッドは 404 `endpoint not found`。

use std::{any::Any, sync::Arc};

use axum::{
    Router,
    middleware::from_fn_with_state,
    response::Response,
    routing::{get, post},
};
use sushee_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    auth_util::AuthUtil,
    error::{Failure, respond_error},
    handler::{
        AuthState,
        CartState,
        MenuState,
        OrderState,
        PaymentState,
        PromotionState,
        ReviewState,
        UserState,
        add_cart,
        create_order,
        create_review,
        delete_cart,
        delete_carts,
        endpoint_not_found,
        list_menus,
        list_orders,
        list_payment_options,
        list_promotions,
        login,
        logout,
        ping,
        refresh,
        register,
        show_cart,
        show_profile,
        update_cart,
        update_profile,
    },
    middleware::{AuthGateState, authenticate},
    usecase::{
        AuthUseCase,
        CartUseCase,
        MenuUseCase,
        OrderUseCase,
        PaymentUseCase,
        PromotionUseCase,
        ReviewUseCase,
        UserUseCase,
    },
};

/// ルーター構築に必要な依存の一式
#[derive(Clone)]
pub struct RouterConfig {
    pub user_usecase:      Arc<dyn UserUseCase>,
    pub auth_usecase:      Arc<dyn AuthUseCase>,
    pub menu_usecase:      Arc<dyn MenuUseCase>,
    pub promotion_usecase: Arc<dyn PromotionUseCase>,
    pub cart_usecase:      Arc<dyn CartUseCase>,
    pub order_usecase:     Arc<dyn OrderUseCase>,
    pub payment_usecase:   Arc<dyn PaymentUseCase>,
    pub review_usecase:    Arc<dyn ReviewUseCase>,
    pub auth_util:         Arc<dyn AuthUtil>,
}

/// ルーターを構築する
pub fn create_router(config: RouterConfig) -> Router {
    let auth_state = Arc::new(AuthState {
        auth_usecase: config.auth_usecase,
    });
    let user_state = Arc::new(UserState {
        user_usecase: config.user_usecase,
    });
    let menu_state = Arc::new(MenuState {
        menu_usecase: config.menu_usecase,
    });
    let promotion_state = Arc::new(PromotionState {
        promotion_usecase: config.promotion_usecase,
    });
    let cart_state = Arc::new(CartState {
        cart_usecase: config.cart_usecase,
    });
    let order_state = Arc::new(OrderState {
        order_usecase: config.order_usecase,
    });
    let payment_state = Arc::new(PaymentState {
        payment_usecase: config.payment_usecase,
    });
    let review_state = Arc::new(ReviewState {
        review_usecase: config.review_usecase,
    });
    let gate_state = AuthGateState {
        auth_util: config.auth_util,
    };

    let public = Router::new()
        .route("/ping", get(ping))
        .route("/api/v1/login", post(login))
        .route("/api/v1/register", post(register))
        .with_state(auth_state.clone())
        .route("/api/v1/menus", get(list_menus))
        .with_state(menu_state)
        .route("/api/v1/promotions", get(list_promotions))
        .with_state(promotion_state);

    // route_layer のため、パスやメソッドが一致しないリクエストは認証ゲートを通らない
    let authenticated = Router::new()
        .route("/api/v1/logout", post(logout))
        .route("/api/v1/refresh", post(refresh))
        .with_state(auth_state)
        .route("/api/v1/users/me", get(show_profile).post(update_profile))
        .with_state(user_state)
        .route(
            "/api/v1/carts",
            get(show_cart).post(add_cart).delete(delete_carts),
        )
        .route(
            "/api/v1/carts/{cartId}",
            post(update_cart).delete(delete_cart),
        )
        .with_state(cart_state)
        .route("/api/v1/orders", get(list_orders).post(create_order))
        .with_state(order_state)
        .route("/api/v1/orders/payment", get(list_payment_options))
        .with_state(payment_state)
        .route("/api/v1/orders/reviews", post(create_review))
        .with_state(review_state)
        .route_layer(from_fn_with_state(gate_state, authenticate));

    // レイヤー順序: 下に書いたものが外側
    // 1. SetRequestIdLayer（最外）: UUID v7 を採番（クライアント提供値があればそれを使用）
    // 2. TraceLayer: request_id 付きのスパンを作成
    // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
    // 4. CatchPanicLayer: panic を Failure::Opaque として 500 に変換
    public
        .merge(authenticated)
        .fallback(endpoint_not_found)
        .method_not_allowed_fallback(endpoint_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

/// panic をエラーレスポンスに変換する
///
/// ペイロードの中身はクライアントに返さない。ERROR ログは `respond_error` が出す。
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_default();
    tracing::debug!(panic.payload = %detail, "ハンドラが panic しました");

    respond_error(Failure::Opaque)
}
