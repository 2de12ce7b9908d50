use sea_orm::{
    entity::prelude::*, ActiveValue, ActiveValue::NotSet, ConnectionTrait, PaginatorTrait, QueryOrder, Set,
};

use crate::{errors, pizza, restaurant};

pub const MIN_PRICE: i32 = 1;
pub const MAX_PRICE: i32 = 30;

/// "This pizza is offered at this restaurant at this price."
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurant_pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Pizza,
    Restaurant,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Pizza => Entity::belongs_to(pizza::Entity)
                .from(Column::PizzaId)
                .to(pizza::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Restaurant => Entity::belongs_to(restaurant::Entity)
                .from(Column::RestaurantId)
                .to(restaurant::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<pizza::Entity> for Entity {
    fn to() -> RelationDef { Relation::Pizza.def() }
}

impl Related<restaurant::Entity> for Entity {
    fn to() -> RelationDef { Relation::Restaurant.def() }
}

/// Price range is checked on every insert and update, whoever the writer is.
#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(price) | ActiveValue::Unchanged(price) = &self.price {
            validate_price(i64::from(*price)).map_err(|e| DbErr::Custom(e.to_string()))?;
        }
        Ok(self)
    }
}

/// Accepts any integer width so out-of-range request values reach the same check.
pub fn validate_price(price: i64) -> Result<i32, errors::ModelError> {
    match i32::try_from(price) {
        Ok(p) if (MIN_PRICE..=MAX_PRICE).contains(&p) => Ok(p),
        _ => Err(errors::ModelError::Validation(format!(
            "price must be between {MIN_PRICE} and {MAX_PRICE}, got {price}"
        ))),
    }
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    price: i32,
    pizza_id: i32,
    restaurant_id: i32,
) -> Result<Model, errors::ModelError> {
    let price = validate_price(price.into())?;
    let am = ActiveModel {
        id: NotSet,
        price: Set(price),
        pizza_id: Set(pizza_id),
        restaurant_id: Set(restaurant_id),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Associations of a restaurant paired with their pizza, ordered by association id.
pub async fn for_restaurant<C: ConnectionTrait>(
    db: &C,
    restaurant_id: i32,
) -> Result<Vec<(Model, pizza::Model)>, errors::ModelError> {
    let rows = Entity::find()
        .filter(Column::RestaurantId.eq(restaurant_id))
        .order_by_asc(Column::Id)
        .find_also_related(pizza::Entity)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    rows.into_iter()
        .map(|(rp, pizza)| match pizza {
            Some(pizza) => Ok((rp, pizza)),
            None => Err(errors::ModelError::Db(format!(
                "restaurant_pizza {} references missing pizza {}",
                rp.id, rp.pizza_id
            ))),
        })
        .collect()
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

pub async fn delete_for_restaurant<C: ConnectionTrait>(db: &C, restaurant_id: i32) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::RestaurantId.eq(restaurant_id))
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}

pub async fn delete_for_pizza<C: ConnectionTrait>(db: &C, pizza_id: i32) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::PizzaId.eq(pizza_id))
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, errors::ModelError> {
    Entity::find().count(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
