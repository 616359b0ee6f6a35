//! # インメモリストア
//!
//! ユースケース実装が使う保存先。プロセス終了で内容は失われる。
//!
//! - [`Catalog`]: メニュー・プロモーション・支払い方法（起動時に確定し、以後不変）
//! - [`UserStore`]: ユーザー、パスワードハッシュ、アクセス/リフレッシュトークン
//! - [`CartStore`] / [`OrderStore`] / [`ReviewStore`]: ユーザーごとの可変データ

use std::{
    collections::{BTreeMap, HashMap},
    sync::atomic::{AtomicI64, Ordering},
};

use chrono::{DateTime, Duration, Utc};
use sushee_domain::{
    DomainError,
    cart::{CartId, CartItem, Quantity},
    menu::{Menu, MenuId},
    order::{Order, OrderId},
    payment::{PaymentOption, PaymentOptionId},
    promotion::{Promotion, PromotionId},
    review::{Review, ReviewId},
    user::{Email, User, UserId},
};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::auth::TokenPair;

/// 連番の払い出し
#[derive(Debug, Default)]
struct Sequence(AtomicI64);

impl Sequence {
    fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

// --- Catalog ---

/// メニュー・プロモーション・支払い方法のカタログ
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    menus:           Vec<Menu>,
    promotions:      Vec<Promotion>,
    payment_options: Vec<PaymentOption>,
}

impl Catalog {
    pub fn new(
        menus: Vec<Menu>,
        promotions: Vec<Promotion>,
        payment_options: Vec<PaymentOption>,
    ) -> Self {
        Self {
            menus,
            promotions,
            payment_options,
        }
    }

    /// 開発用の初期データ入りカタログ
    ///
    /// プロモーションは `now` を基準に、開催中のものと終了済みのものを 1 件ずつ作る。
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let menu = |id: i64, name: &str, category: &str, price: i64, available: bool| Menu {
            id: MenuId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            price,
            description: format!("{name} ({category})"),
            available,
        };

        let menus = vec![
            menu(1, "Salmon Nigiri", "Nigiri", 300, true),
            menu(2, "Tuna Nigiri", "Nigiri", 350, true),
            menu(3, "California Roll", "Roll", 450, true),
            menu(4, "Dragon Roll", "Roll", 600, true),
            menu(5, "Miso Soup", "Side", 150, true),
            menu(6, "Uni Gunkan", "Gunkan", 800, false),
        ];

        let promotions = vec![
            Promotion {
                id:               PromotionId::new(1),
                name:             "Weekday Ten".to_string(),
                description:      "10% off orders of 1000 or more".to_string(),
                discount_percent: 10,
                min_spend:        1000,
                starts_at:        now - Duration::days(30),
                ends_at:          now + Duration::days(365),
            },
            Promotion {
                id:               PromotionId::new(2),
                name:             "Opening Week".to_string(),
                description:      "20% off everything".to_string(),
                discount_percent: 20,
                min_spend:        0,
                starts_at:        now - Duration::days(60),
                ends_at:          now - Duration::days(53),
            },
        ];

        let payment_options = ["Cash", "Credit Card", "E-Wallet"]
            .into_iter()
            .zip(1..)
            .map(|(name, id)| PaymentOption {
                id:   PaymentOptionId::new(id),
                name: name.to_string(),
            })
            .collect();

        Self::new(menus, promotions, payment_options)
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn find_menu(&self, id: MenuId) -> Option<&Menu> {
        self.menus.iter().find(|menu| menu.id == id)
    }

    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    pub fn find_promotion(&self, id: PromotionId) -> Option<&Promotion> {
        self.promotions.iter().find(|promotion| promotion.id == id)
    }

    pub fn payment_options(&self) -> &[PaymentOption] {
        &self.payment_options
    }

    pub fn find_payment_option(&self, id: PaymentOptionId) -> Option<&PaymentOption> {
        self.payment_options.iter().find(|option| option.id == id)
    }
}

// --- UserStore ---

#[derive(Debug)]
struct Account {
    user:          User,
    password_hash: String,
}

#[derive(Debug, Default)]
struct UserTables {
    accounts:       BTreeMap<UserId, Account>,
    access_tokens:  HashMap<String, UserId>,
    refresh_tokens: HashMap<String, UserId>,
}

/// ユーザーとセッショントークンの保存先
#[derive(Debug, Default)]
pub struct UserStore {
    tables:   RwLock<UserTables>,
    sequence: Sequence,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> UserId {
        UserId::new(self.sequence.next())
    }

    /// ユーザーを登録する。メールアドレスが重複する場合は Conflict
    pub async fn insert(&self, user: User, password_hash: String) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;

        if tables
            .accounts
            .values()
            .any(|account| account.user.email == user.email)
        {
            return Err(DomainError::Conflict(
                "email is already registered".to_string(),
            ));
        }

        tables.accounts.insert(
            user.id,
            Account {
                user: user.clone(),
                password_hash,
            },
        );
        Ok(user)
    }

    /// メールアドレスでユーザーとパスワードハッシュを取得する
    pub async fn find_by_email(&self, email: &Email) -> Option<(User, String)> {
        let tables = self.tables.read().await;
        tables
            .accounts
            .values()
            .find(|account| &account.user.email == email)
            .map(|account| (account.user.clone(), account.password_hash.clone()))
    }

    pub async fn find(&self, id: UserId) -> Option<User> {
        let tables = self.tables.read().await;
        tables.accounts.get(&id).map(|account| account.user.clone())
    }

    /// ユーザー情報を置き換える。存在しない場合は NotFound
    pub async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;
        let account = tables
            .accounts
            .get_mut(&user.id)
            .ok_or_else(|| DomainError::not_found("user", user.id))?;
        account.user = user.clone();
        Ok(user)
    }

    /// 新しいトークンペアを発行する
    pub async fn issue_tokens(&self, user_id: UserId) -> TokenPair {
        let pair = TokenPair {
            access_token:  Uuid::new_v4().to_string(),
            refresh_token: Uuid::new_v4().to_string(),
        };

        let mut tables = self.tables.write().await;
        tables
            .access_tokens
            .insert(pair.access_token.clone(), user_id);
        tables
            .refresh_tokens
            .insert(pair.refresh_token.clone(), user_id);
        pair
    }

    pub async fn user_for_access_token(&self, access_token: &str) -> Option<UserId> {
        let tables = self.tables.read().await;
        tables.access_tokens.get(access_token).copied()
    }

    /// リフレッシュトークンを消費して新しいペアを発行する
    ///
    /// トークンが存在しない、または別ユーザーのものなら `None`。
    /// 成功時は使用中のアクセストークンも失効させる。
    pub async fn rotate_tokens(
        &self,
        user_id: UserId,
        access_token: &str,
        refresh_token: &str,
    ) -> Option<TokenPair> {
        {
            let mut tables = self.tables.write().await;
            if tables.refresh_tokens.get(refresh_token) != Some(&user_id) {
                return None;
            }
            tables.refresh_tokens.remove(refresh_token);
            tables.access_tokens.remove(access_token);
        }

        Some(self.issue_tokens(user_id).await)
    }

    /// アクセストークンと、そのユーザーの全リフレッシュトークンを失効させる
    pub async fn revoke_tokens(&self, user_id: UserId, access_token: &str) {
        let mut tables = self.tables.write().await;
        tables.access_tokens.remove(access_token);
        tables.refresh_tokens.retain(|_, owner| *owner != user_id);
    }
}

// --- CartStore ---

/// カート明細の保存先
#[derive(Debug, Default)]
pub struct CartStore {
    items:    RwLock<BTreeMap<CartId, CartItem>>,
    sequence: Sequence,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self, user_id: UserId) -> Vec<CartItem> {
        let items = self.items.read().await;
        items
            .values()
            .filter(|item| item.is_owned_by(user_id))
            .cloned()
            .collect()
    }

    /// メニューをカートに積む
    ///
    /// 同じメニューの明細が既にあれば数量を加算する。
    pub async fn add(
        &self,
        user_id: UserId,
        menu_id: MenuId,
        quantity: Quantity,
        now: DateTime<Utc>,
    ) -> Result<CartItem, DomainError> {
        let mut items = self.items.write().await;

        if let Some(existing) = items
            .values_mut()
            .find(|item| item.is_owned_by(user_id) && item.menu_id == menu_id)
        {
            existing.quantity = existing.quantity.add(quantity)?;
            return Ok(existing.clone());
        }

        let item = CartItem {
            id: CartId::new(self.sequence.next()),
            user_id,
            menu_id,
            quantity,
            added_at: now,
        };
        items.insert(item.id, item.clone());
        Ok(item)
    }

    pub async fn update(
        &self,
        user_id: UserId,
        cart_id: CartId,
        quantity: Quantity,
    ) -> Result<CartItem, DomainError> {
        let mut items = self.items.write().await;
        let item = items
            .get_mut(&cart_id)
            .filter(|item| item.is_owned_by(user_id))
            .ok_or_else(|| DomainError::not_found("cart", cart_id))?;
        item.quantity = quantity;
        Ok(item.clone())
    }

    pub async fn remove(&self, user_id: UserId, cart_id: CartId) -> Result<(), DomainError> {
        let mut items = self.items.write().await;
        if !items.get(&cart_id).is_some_and(|item| item.is_owned_by(user_id)) {
            return Err(DomainError::not_found("cart", cart_id));
        }
        items.remove(&cart_id);
        Ok(())
    }

    pub async fn remove_all(&self, user_id: UserId) {
        let mut items = self.items.write().await;
        items.retain(|_, item| !item.is_owned_by(user_id));
    }

    /// 指定した明細を取り出す（ストアからは削除される）
    ///
    /// 1 件でも見つからない、または他人の明細が含まれる場合は何も削除せず NotFound。
    /// `build` が失敗した場合も何も削除しない。
    pub async fn checkout<T>(
        &self,
        user_id: UserId,
        cart_ids: &[CartId],
        build: impl FnOnce(Vec<CartItem>) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let mut items = self.items.write().await;

        let mut selected = Vec::with_capacity(cart_ids.len());
        for cart_id in cart_ids {
            if selected.iter().any(|item: &CartItem| item.id == *cart_id) {
                continue;
            }
            let item = items
                .get(cart_id)
                .filter(|item| item.is_owned_by(user_id))
                .ok_or_else(|| DomainError::not_found("cart", cart_id))?;
            selected.push(item.clone());
        }

        let built = build(selected)?;
        for cart_id in cart_ids {
            items.remove(cart_id);
        }
        Ok(built)
    }
}

// --- OrderStore ---

/// 注文の保存先
#[derive(Debug, Default)]
pub struct OrderStore {
    orders:   RwLock<BTreeMap<OrderId, Order>>,
    sequence: Sequence,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> OrderId {
        OrderId::new(self.sequence.next())
    }

    pub async fn insert(&self, order: Order) -> Order {
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order.clone());
        order
    }

    pub async fn find(&self, id: OrderId) -> Option<Order> {
        let orders = self.orders.read().await;
        orders.get(&id).cloned()
    }

    /// ユーザーの注文を新しい順に返す
    pub async fn list(&self, user_id: UserId) -> Vec<Order> {
        let orders = self.orders.read().await;
        orders
            .values()
            .rev()
            .filter(|order| order.is_owned_by(user_id))
            .cloned()
            .collect()
    }
}

// --- ReviewStore ---

/// レビューの保存先
#[derive(Debug, Default)]
pub struct ReviewStore {
    reviews:  RwLock<Vec<Review>>,
    sequence: Sequence,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> ReviewId {
        ReviewId::new(self.sequence.next())
    }

    /// レビューを保存する。同じ注文・メニューへのレビューが既にあれば Conflict
    pub async fn insert(&self, review: Review) -> Result<Review, DomainError> {
        let mut reviews = self.reviews.write().await;
        if reviews
            .iter()
            .any(|r| r.order_id == review.order_id && r.menu_id == review.menu_id)
        {
            return Err(DomainError::Conflict(
                "menu has already been reviewed for this order".to_string(),
            ));
        }
        reviews.push(review.clone());
        Ok(review)
    }
}
