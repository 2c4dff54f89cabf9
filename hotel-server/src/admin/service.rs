//! Admin intent dispatch
//!
//! Routes each [`AdminIntent`] to the matching repository. Create and
//! update payloads pass field validation first; storage failures are
//! reported with the target model's error codes.

use super::registry::{AdminSite, ModelMeta};
use crate::db::repository::{
    RepoError, booking, employee, guest, guest_service, payment, room, room_type, service,
};
use crate::utils::validation;
use crate::utils::{AppError, AppResult, repo_err_to_app};
use serde::Serialize;
use shared::intent::{AdminIntent, CrudAction, DataResult, PageRequest, PaginatedResponse};
use shared::models::{
    BookingCreate, BookingUpdate, EmployeeCreate, EmployeeUpdate, GuestCreate, GuestServiceCreate,
    GuestServiceUpdate, GuestUpdate, PaymentCreate, PaymentUpdate, RoomCreate, RoomTypeCreate,
    RoomTypeUpdate, RoomUpdate, ServiceCreate, ServiceUpdate,
};
use sqlx::SqlitePool;

/// Admin console backend
#[derive(Clone)]
pub struct AdminService {
    pool: SqlitePool,
    site: AdminSite,
}

impl AdminService {
    pub fn new(pool: SqlitePool, site: AdminSite) -> Self {
        Self { pool, site }
    }

    pub fn site(&self) -> &AdminSite {
        &self.site
    }

    /// Execute one intent
    ///
    /// Intents for models missing from the site fail with
    /// `ModelNotRegistered`.
    pub async fn dispatch(&self, intent: AdminIntent) -> AppResult<DataResult> {
        let meta = self.site.require(intent.model())?;
        tracing::debug!(model = intent.model(), action = intent.action(), "Admin intent");

        match intent {
            AdminIntent::Employee(action) => self.employee(meta, action).await,
            AdminIntent::Guest(action) => self.guest(meta, action).await,
            AdminIntent::RoomType(action) => self.room_type(meta, action).await,
            AdminIntent::Room(action) => self.room(meta, action).await,
            AdminIntent::Booking(action) => self.booking(meta, action).await,
            AdminIntent::Service(action) => self.service(meta, action).await,
            AdminIntent::GuestService(action) => self.guest_service(meta, action).await,
            AdminIntent::Payment(action) => self.payment(meta, action).await,
        }
    }

    /// Execute one intent, folding failures into the result
    pub async fn handle(&self, intent: AdminIntent) -> DataResult {
        let model = intent.model();
        let action = intent.action();
        match self.dispatch(intent).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(model, action, code = %e.code, error = %e.message, "Admin intent failed");
                DataResult::err(&e)
            }
        }
    }

    async fn employee(
        &self,
        meta: &ModelMeta,
        action: CrudAction<EmployeeCreate, EmployeeUpdate>,
    ) -> AppResult<DataResult> {
        let err = |e: RepoError| repo_err_to_app(e, &meta.codes);
        match action {
            CrudAction::List(page) => {
                let (limit, offset) = bounds(&page);
                let rows = employee::find_page(&self.pool, limit, offset)
                    .await
                    .map_err(err)?;
                let total = employee::count(&self.pool).await.map_err(err)?;
                Ok(listed(meta, rows, total, page))
            }
            CrudAction::Get { id } => {
                found(meta, id, employee::find_by_id(&self.pool, id).await.map_err(err)?)
            }
            CrudAction::Create(data) => {
                validation::validate_employee_create(&data)?;
                let row = employee::create(&self.pool, data).await.map_err(err)?;
                tracing::info!(id = row.id, username = %row.username, role = %row.role, "Employee created");
                Ok(saved(format!("{} created", meta.verbose_name), row.id, &row))
            }
            CrudAction::Update { id, data } => {
                validation::validate_employee_update(&data)?;
                let row = employee::update(&self.pool, id, data).await.map_err(err)?;
                Ok(saved(format!("{} {id} updated", meta.verbose_name), id, &row))
            }
            CrudAction::Delete { id } => {
                if !employee::delete(&self.pool, id).await.map_err(err)? {
                    return Err(missing(meta, id));
                }
                tracing::info!(id, "Employee deactivated");
                Ok(DataResult::ok_with_id(
                    format!("{} {id} deactivated", meta.verbose_name),
                    id,
                ))
            }
        }
    }

    async fn guest(
        &self,
        meta: &ModelMeta,
        action: CrudAction<GuestCreate, GuestUpdate>,
    ) -> AppResult<DataResult> {
        let err = |e: RepoError| repo_err_to_app(e, &meta.codes);
        match action {
            CrudAction::List(page) => {
                let (limit, offset) = bounds(&page);
                let rows = guest::find_page(&self.pool, limit, offset)
                    .await
                    .map_err(err)?;
                let total = guest::count(&self.pool).await.map_err(err)?;
                Ok(listed(meta, rows, total, page))
            }
            CrudAction::Get { id } => {
                found(meta, id, guest::find_by_id(&self.pool, id).await.map_err(err)?)
            }
            CrudAction::Create(data) => {
                validation::validate_guest_create(&data)?;
                let row = guest::create(&self.pool, data).await.map_err(err)?;
                Ok(saved(format!("{} created", meta.verbose_name), row.id, &row))
            }
            CrudAction::Update { id, data } => {
                validation::validate_guest_update(&data)?;
                let row = guest::update(&self.pool, id, data).await.map_err(err)?;
                Ok(saved(format!("{} {id} updated", meta.verbose_name), id, &row))
            }
            CrudAction::Delete { id } => {
                deleted(meta, id, guest::delete(&self.pool, id).await.map_err(err)?)
            }
        }
    }

    async fn room_type(
        &self,
        meta: &ModelMeta,
        action: CrudAction<RoomTypeCreate, RoomTypeUpdate>,
    ) -> AppResult<DataResult> {
        let err = |e: RepoError| repo_err_to_app(e, &meta.codes);
        match action {
            CrudAction::List(page) => {
                let (limit, offset) = bounds(&page);
                let rows = room_type::find_page(&self.pool, limit, offset)
                    .await
                    .map_err(err)?;
                let total = room_type::count(&self.pool).await.map_err(err)?;
                Ok(listed(meta, rows, total, page))
            }
            CrudAction::Get { id } => {
                found(meta, id, room_type::find_by_id(&self.pool, id).await.map_err(err)?)
            }
            CrudAction::Create(data) => {
                validation::validate_room_type_create(&data)?;
                let row = room_type::create(&self.pool, data).await.map_err(err)?;
                Ok(saved(format!("{} created", meta.verbose_name), row.id, &row))
            }
            CrudAction::Update { id, data } => {
                validation::validate_room_type_update(&data)?;
                let row = room_type::update(&self.pool, id, data).await.map_err(err)?;
                Ok(saved(format!("{} {id} updated", meta.verbose_name), id, &row))
            }
            CrudAction::Delete { id } => {
                deleted(meta, id, room_type::delete(&self.pool, id).await.map_err(err)?)
            }
        }
    }

    async fn room(
        &self,
        meta: &ModelMeta,
        action: CrudAction<RoomCreate, RoomUpdate>,
    ) -> AppResult<DataResult> {
        let err = |e: RepoError| repo_err_to_app(e, &meta.codes);
        match action {
            CrudAction::List(page) => {
                let (limit, offset) = bounds(&page);
                let rows = room::find_page(&self.pool, limit, offset)
                    .await
                    .map_err(err)?;
                let total = room::count(&self.pool).await.map_err(err)?;
                Ok(listed(meta, rows, total, page))
            }
            CrudAction::Get { id } => {
                found(meta, id, room::find_by_id(&self.pool, id).await.map_err(err)?)
            }
            CrudAction::Create(data) => {
                validation::validate_room_create(&data)?;
                let row = room::create(&self.pool, data).await.map_err(err)?;
                Ok(saved(format!("{} created", meta.verbose_name), row.id, &row))
            }
            CrudAction::Update { id, data } => {
                validation::validate_room_update(&data)?;
                let row = room::update(&self.pool, id, data).await.map_err(err)?;
                Ok(saved(format!("{} {id} updated", meta.verbose_name), id, &row))
            }
            CrudAction::Delete { id } => {
                deleted(meta, id, room::delete(&self.pool, id).await.map_err(err)?)
            }
        }
    }

    async fn booking(
        &self,
        meta: &ModelMeta,
        action: CrudAction<BookingCreate, BookingUpdate>,
    ) -> AppResult<DataResult> {
        let err = |e: RepoError| repo_err_to_app(e, &meta.codes);
        match action {
            CrudAction::List(page) => {
                let (limit, offset) = bounds(&page);
                let rows = booking::find_page(&self.pool, limit, offset)
                    .await
                    .map_err(err)?;
                let total = booking::count(&self.pool).await.map_err(err)?;
                Ok(listed(meta, rows, total, page))
            }
            CrudAction::Get { id } => {
                found(meta, id, booking::find_by_id(&self.pool, id).await.map_err(err)?)
            }
            CrudAction::Create(data) => {
                validation::validate_booking_create(&data)?;
                let row = booking::create(&self.pool, data).await.map_err(err)?;
                tracing::info!(id = row.id, room = %row.room_number, status = %row.status, "Booking created");
                Ok(saved(format!("{} created", meta.verbose_name), row.id, &row))
            }
            CrudAction::Update { id, data } => {
                validation::validate_booking_update(&data)?;
                let row = booking::update(&self.pool, id, data).await.map_err(err)?;
                Ok(saved(format!("{} {id} updated", meta.verbose_name), id, &row))
            }
            CrudAction::Delete { id } => {
                deleted(meta, id, booking::delete(&self.pool, id).await.map_err(err)?)
            }
        }
    }

    async fn service(
        &self,
        meta: &ModelMeta,
        action: CrudAction<ServiceCreate, ServiceUpdate>,
    ) -> AppResult<DataResult> {
        let err = |e: RepoError| repo_err_to_app(e, &meta.codes);
        match action {
            CrudAction::List(page) => {
                let (limit, offset) = bounds(&page);
                let rows = service::find_page(&self.pool, limit, offset)
                    .await
                    .map_err(err)?;
                let total = service::count(&self.pool).await.map_err(err)?;
                Ok(listed(meta, rows, total, page))
            }
            CrudAction::Get { id } => {
                found(meta, id, service::find_by_id(&self.pool, id).await.map_err(err)?)
            }
            CrudAction::Create(data) => {
                validation::validate_service_create(&data)?;
                let row = service::create(&self.pool, data).await.map_err(err)?;
                Ok(saved(format!("{} created", meta.verbose_name), row.id, &row))
            }
            CrudAction::Update { id, data } => {
                validation::validate_service_update(&data)?;
                let row = service::update(&self.pool, id, data).await.map_err(err)?;
                Ok(saved(format!("{} {id} updated", meta.verbose_name), id, &row))
            }
            CrudAction::Delete { id } => {
                deleted(meta, id, service::delete(&self.pool, id).await.map_err(err)?)
            }
        }
    }

    async fn guest_service(
        &self,
        meta: &ModelMeta,
        action: CrudAction<GuestServiceCreate, GuestServiceUpdate>,
    ) -> AppResult<DataResult> {
        let err = |e: RepoError| repo_err_to_app(e, &meta.codes);
        match action {
            CrudAction::List(page) => {
                let (limit, offset) = bounds(&page);
                let rows = guest_service::find_page(&self.pool, limit, offset)
                    .await
                    .map_err(err)?;
                let total = guest_service::count(&self.pool).await.map_err(err)?;
                Ok(listed(meta, rows, total, page))
            }
            CrudAction::Get { id } => {
                found(meta, id, guest_service::find_by_id(&self.pool, id).await.map_err(err)?)
            }
            CrudAction::Create(data) => {
                let row = guest_service::create(&self.pool, data).await.map_err(err)?;
                Ok(saved(format!("{} created", meta.verbose_name), row.id, &row))
            }
            CrudAction::Update { id, data } => {
                let row = guest_service::update(&self.pool, id, data).await.map_err(err)?;
                Ok(saved(format!("{} {id} updated", meta.verbose_name), id, &row))
            }
            CrudAction::Delete { id } => {
                deleted(meta, id, guest_service::delete(&self.pool, id).await.map_err(err)?)
            }
        }
    }

    async fn payment(
        &self,
        meta: &ModelMeta,
        action: CrudAction<PaymentCreate, PaymentUpdate>,
    ) -> AppResult<DataResult> {
        let err = |e: RepoError| repo_err_to_app(e, &meta.codes);
        match action {
            CrudAction::List(page) => {
                let (limit, offset) = bounds(&page);
                let rows = payment::find_page(&self.pool, limit, offset)
                    .await
                    .map_err(err)?;
                let total = payment::count(&self.pool).await.map_err(err)?;
                Ok(listed(meta, rows, total, page))
            }
            CrudAction::Get { id } => {
                found(meta, id, payment::find_by_id(&self.pool, id).await.map_err(err)?)
            }
            CrudAction::Create(data) => {
                validation::validate_payment_create(&data)?;
                let row = payment::create(&self.pool, data).await.map_err(err)?;
                tracing::info!(id = row.id, booking_id = row.booking_id, amount = %row.amount, method = %row.method, "Payment recorded");
                Ok(saved(format!("{} created", meta.verbose_name), row.id, &row))
            }
            CrudAction::Update { id, data } => {
                validation::validate_payment_update(&data)?;
                let row = payment::update(&self.pool, id, data).await.map_err(err)?;
                Ok(saved(format!("{} {id} updated", meta.verbose_name), id, &row))
            }
            CrudAction::Delete { id } => {
                deleted(meta, id, payment::delete(&self.pool, id).await.map_err(err)?)
            }
        }
    }
}

fn missing(meta: &ModelMeta, id: i64) -> AppError {
    AppError::with_message(
        meta.codes.not_found,
        format!("{} {id} not found", meta.verbose_name),
    )
    .with_detail("model", meta.model)
    .with_detail("id", id)
}

/// SQL `LIMIT`/`OFFSET` for a page request
fn bounds(page: &PageRequest) -> (i64, i64) {
    (i64::from(page.page_size()), page.offset())
}

fn listed<T: Serialize>(
    meta: &ModelMeta,
    rows: Vec<T>,
    total: i64,
    page: PageRequest,
) -> DataResult {
    let total = u64::try_from(total).unwrap_or_default();
    let page = PaginatedResponse::new(rows, total, page.page_number(), page.page_size());
    DataResult::ok_with_data(
        format!("{} {}", page.total, meta.verbose_name_plural.to_lowercase()),
        page,
    )
}

fn found<T: Serialize>(meta: &ModelMeta, id: i64, row: Option<T>) -> AppResult<DataResult> {
    let row = row.ok_or_else(|| missing(meta, id))?;
    let mut result = DataResult::ok_with_data(format!("{} {id}", meta.verbose_name), row);
    result.id = Some(id);
    Ok(result)
}

fn saved<T: Serialize>(message: String, id: i64, row: &T) -> DataResult {
    let mut result = DataResult::ok_with_data(message, row);
    result.id = Some(id);
    result
}

fn deleted(meta: &ModelMeta, id: i64, removed: bool) -> AppResult<DataResult> {
    if !removed {
        return Err(missing(meta, id));
    }
    tracing::info!(model = meta.model, id, "Row deleted");
    Ok(DataResult::ok_with_id(
        format!("{} {id} deleted", meta.verbose_name),
        id,
    ))
}
