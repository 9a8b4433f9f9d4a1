//! Brawl records between clubs.
//!
//! Clubs are addressed by name: each name resolves to the oldest active club with
//! exactly that name, and a club is created on the fly when none exists.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{brawl::BrawlRepository, club::ClubRepository},
    error::AppError,
    model::{
        brawl::{
            AddBrawlParams, Brawl, BrawlDetails, CreateBrawlParams, EditBrawlParams,
            UpdateBrawlParams,
        },
        club::{Club, CreateClubParams},
    },
    service::{audit_log::AuditLogService, club::require_name},
};

pub struct BrawlService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BrawlService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a brawl between two clubs given by name.
    ///
    /// # Returns
    /// - `Ok(BrawlDetails)` - The stored brawl with both club names
    /// - `Err(AppError::BadRequest)` - Blank or identical club names
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_brawl(&self, params: AddBrawlParams) -> Result<BrawlDetails, AppError> {
        require_name(&params.first_club_name, "First club name")?;
        require_name(&params.second_club_name, "Second club name")?;
        if params.first_club_name == params.second_club_name {
            return Err(same_club());
        }

        let first = self.resolve_club(params.first_club_name).await?;
        let second = self.resolve_club(params.second_club_name).await?;

        let brawl = BrawlRepository::new(self.db)
            .create(CreateBrawlParams {
                first_club_id: first.id,
                second_club_id: second.id,
                date: params.date,
                longitude: params.longitude,
                latitude: params.latitude,
            })
            .await?;

        AuditLogService::new(self.db)
            .add_log(format!(
                "Added brawl {} between clubs {} and {}",
                brawl.id, first.id, second.id
            ))
            .await;

        Ok(BrawlDetails {
            brawl,
            first_club_name: first.name,
            second_club_name: second.name,
        })
    }

    /// Applies a partial update to a brawl.
    ///
    /// Club names given in the patch are resolved like in `add_brawl`.
    ///
    /// # Returns
    /// - `Ok(())` - Present fields written
    /// - `Err(AppError::NotFound)` - Unknown brawl
    /// - `Err(AppError::BadRequest)` - Blank names, or both sides would be the same club
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn edit_brawl(&self, params: EditBrawlParams) -> Result<(), AppError> {
        let brawl_repo = BrawlRepository::new(self.db);
        let brawl = brawl_repo
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| brawl_not_found(params.id))?;

        for name in [&params.first_club_name, &params.second_club_name]
            .into_iter()
            .flatten()
        {
            require_name(name, "Club name")?;
        }
        if params.first_club_name.is_some() && params.first_club_name == params.second_club_name {
            return Err(same_club());
        }

        let first_club_id = match params.first_club_name {
            Some(name) => Some(self.resolve_club(name).await?.id),
            None => None,
        };
        let second_club_id = match params.second_club_name {
            Some(name) => Some(self.resolve_club(name).await?.id),
            None => None,
        };
        if first_club_id.unwrap_or(brawl.first_club_id)
            == second_club_id.unwrap_or(brawl.second_club_id)
        {
            return Err(same_club());
        }

        let result = brawl_repo
            .update(UpdateBrawlParams {
                id: params.id,
                first_club_id,
                second_club_id,
                date: params.date,
                longitude: params.longitude,
                latitude: params.latitude,
            })
            .await;
        match result {
            Ok(_) => {}
            Err(DbErr::RecordNotFound(_)) => return Err(brawl_not_found(params.id)),
            Err(e) => return Err(e.into()),
        }

        AuditLogService::new(self.db)
            .add_log(format!("Edited brawl {}", params.id))
            .await;

        Ok(())
    }

    /// Deletes a brawl.
    ///
    /// # Returns
    /// - `Ok(())` - Brawl removed
    /// - `Err(AppError::NotFound)` - Unknown brawl
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete_brawl(&self, id: i32) -> Result<(), AppError> {
        if !BrawlRepository::new(self.db).delete(id).await? {
            return Err(brawl_not_found(id));
        }

        AuditLogService::new(self.db)
            .add_log(format!("Deleted brawl {}", id))
            .await;

        Ok(())
    }

    /// Gets a brawl with the names of both clubs.
    ///
    /// Club names are reported even if a club has since been soft-deleted.
    ///
    /// # Returns
    /// - `Ok(BrawlDetails)` - The brawl
    /// - `Err(AppError::NotFound)` - Unknown brawl
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_brawl(&self, id: i32) -> Result<BrawlDetails, AppError> {
        let brawl = BrawlRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| brawl_not_found(id))?;

        let mut details = self.with_club_names(vec![brawl]).await?;

        details.pop().ok_or_else(|| brawl_not_found(id))
    }

    /// Gets a page of brawls ordered by id.
    pub async fn get_brawls(&self, skip: u64, take: u64) -> Result<Vec<BrawlDetails>, AppError> {
        let brawls = BrawlRepository::new(self.db)
            .get_paginated(skip, take)
            .await?;

        self.with_club_names(brawls).await
    }

    /// Finds the active club with the given name, creating it when there is none.
    async fn resolve_club(&self, name: String) -> Result<Club, AppError> {
        let club_repo = ClubRepository::new(self.db);
        if let Some(club) = club_repo.get_active_by_name(&name).await? {
            return Ok(club);
        }

        let club = club_repo
            .create(CreateClubParams {
                name,
                ..Default::default()
            })
            .await?;

        AuditLogService::new(self.db)
            .add_log(format!("Added club {} '{}'", club.id, club.name))
            .await;

        Ok(club)
    }

    async fn with_club_names(&self, brawls: Vec<Brawl>) -> Result<Vec<BrawlDetails>, AppError> {
        let club_ids: Vec<i32> = brawls
            .iter()
            .flat_map(|b| [b.first_club_id, b.second_club_id])
            .collect();
        let clubs = ClubRepository::new(self.db)
            .get_by_ids(club_ids, true)
            .await?;

        let club_name = |brawl: &Brawl, club_id: i32| {
            clubs.get(&club_id).map(|c| c.name.clone()).ok_or_else(|| {
                AppError::InternalError(format!(
                    "Brawl {} references missing club {}",
                    brawl.id, club_id
                ))
            })
        };

        brawls
            .into_iter()
            .map(|brawl| {
                Ok(BrawlDetails {
                    first_club_name: club_name(&brawl, brawl.first_club_id)?,
                    second_club_name: club_name(&brawl, brawl.second_club_id)?,
                    brawl,
                })
            })
            .collect()
    }
}

fn brawl_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Brawl with id {} not found", id))
}

fn same_club() -> AppError {
    AppError::BadRequest("A brawl needs two different clubs".to_string())
}

#[cfg(test)]
mod test;
