//! # 依存関係の組み立て
//!
//! インメモリストアとユースケース実装を生成し、[`RouterConfig`] にまとめる。

use std::sync::Arc;

use sushee_domain::clock::Clock;

use crate::{
    router::RouterConfig,
    usecase::{
        AuthUseCaseImpl,
        CartUseCaseImpl,
        MenuUseCaseImpl,
        OrderUseCaseImpl,
        PaymentUseCaseImpl,
        PromotionUseCaseImpl,
        ReviewUseCaseImpl,
        SessionAuthUtil,
        UserUseCaseImpl,
        store::{CartStore, Catalog, OrderStore, ReviewStore, UserStore},
    },
};

/// インメモリ実装で [`RouterConfig`] を組み立てる
///
/// カタログは `clock` の現在時刻を基準にシードする。
pub fn in_memory_router_config(clock: Arc<dyn Clock>) -> RouterConfig {
    let catalog = Arc::new(Catalog::seeded(clock.now()));
    let users = Arc::new(UserStore::new());
    let carts = Arc::new(CartStore::new());
    let orders = Arc::new(OrderStore::new());
    let reviews = Arc::new(ReviewStore::new());

    RouterConfig {
        user_usecase:      Arc::new(UserUseCaseImpl::new(users.clone())),
        auth_usecase:      Arc::new(AuthUseCaseImpl::new(users.clone(), clock.clone())),
        menu_usecase:      Arc::new(MenuUseCaseImpl::new(catalog.clone())),
        promotion_usecase: Arc::new(PromotionUseCaseImpl::new(catalog.clone(), clock.clone())),
        cart_usecase:      Arc::new(CartUseCaseImpl::new(
            catalog.clone(),
            carts.clone(),
            clock.clone(),
        )),
        order_usecase:     Arc::new(OrderUseCaseImpl::new(
            catalog.clone(),
            carts,
            orders.clone(),
            clock.clone(),
        )),
        payment_usecase:   Arc::new(PaymentUseCaseImpl::new(catalog)),
        review_usecase:    Arc::new(ReviewUseCaseImpl::new(orders, reviews, clock)),
        auth_util:         Arc::new(SessionAuthUtil::new(users)),
    }
}
