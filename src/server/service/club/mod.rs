//! Club directory business logic.
//!
//! `ClubService` manages clubs, their chants and their relations, and assembles the
//! `ClubDetails` view returned by reads: a club with its chants, its fans and the
//! relations pointing at it, each relation resolved to the counterpart club's name.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{
        chant::ChantRepository, club::ClubRepository, club_relation::ClubRelationRepository,
        member::MemberRepository,
    },
    error::AppError,
    model::club::{
        Chant, Club, ClubDetails, ClubRelationKey, CreateChantParams, CreateClubParams, Fan,
        GetClubsParams, RelatedClub, UpdateClubParams,
    },
    service::audit_log::AuditLogService,
};

pub struct ClubService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new club.
    ///
    /// Names are not checked for duplicates, only for being non-blank.
    ///
    /// # Returns
    /// - `Ok(ClubDetails)` - The created club with empty collections
    /// - `Err(AppError::BadRequest)` - Blank name
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_club(&self, params: CreateClubParams) -> Result<ClubDetails, AppError> {
        require_name(&params.name, "Club name")?;

        let club = ClubRepository::new(self.db).create(params).await?;

        AuditLogService::new(self.db)
            .add_log(format!("Added club {} '{}'", club.id, club.name))
            .await;

        Ok(ClubDetails {
            club,
            chants: Vec::new(),
            relations: Vec::new(),
            fans: Vec::new(),
        })
    }

    /// Soft-deletes a club.
    ///
    /// Chants, fans, relations and brawls of the club are kept.
    ///
    /// # Returns
    /// - `Ok(())` - Club marked as deleted
    /// - `Err(AppError::NotFound)` - Unknown or already deleted club
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete_club(&self, id: i32) -> Result<(), AppError> {
        let deleted = ClubRepository::new(self.db).soft_delete(id).await?;
        if !deleted {
            return Err(club_not_found(id));
        }

        AuditLogService::new(self.db)
            .add_log(format!("Deleted club {}", id))
            .await;

        Ok(())
    }

    /// Applies a partial update to an active club.
    ///
    /// # Returns
    /// - `Ok(())` - Present fields written, omitted fields unchanged
    /// - `Err(AppError::NotFound)` - No active club with that id
    /// - `Err(AppError::BadRequest)` - New name is blank
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn edit_club(&self, params: UpdateClubParams) -> Result<(), AppError> {
        if let Some(name) = &params.name {
            require_name(name, "Club name")?;
        }

        let id = params.id;
        match ClubRepository::new(self.db).update(params).await {
            Ok(_) => {}
            Err(DbErr::RecordNotFound(_)) => return Err(club_not_found(id)),
            Err(e) => return Err(e.into()),
        }

        AuditLogService::new(self.db)
            .add_log(format!("Edited club {}", id))
            .await;

        Ok(())
    }

    /// Adds a chant to an active club.
    ///
    /// # Returns
    /// - `Ok(Chant)` - The created chant
    /// - `Err(AppError::BadRequest)` - Club is unknown or soft-deleted, or lyrics are blank
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_chant(&self, params: CreateChantParams) -> Result<Chant, AppError> {
        require_name(&params.lyrics, "Chant lyrics")?;

        if !ClubRepository::new(self.db)
            .exists_active(params.club_id)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "Club with id {} does not exist",
                params.club_id
            )));
        }

        let chant = ChantRepository::new(self.db).create(params).await?;

        AuditLogService::new(self.db)
            .add_log(format!("Added chant {} to club {}", chant.id, chant.club_id))
            .await;

        Ok(chant)
    }

    /// Overwrites the lyrics of a chant.
    ///
    /// # Returns
    /// - `Ok(())` - Lyrics replaced
    /// - `Err(AppError::NotFound)` - Unknown chant
    /// - `Err(AppError::BadRequest)` - Blank lyrics
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn edit_chant(&self, id: i32, lyrics: String) -> Result<(), AppError> {
        require_name(&lyrics, "Chant lyrics")?;

        ChantRepository::new(self.db)
            .update_lyrics(id, lyrics)
            .await?
            .ok_or_else(|| chant_not_found(id))?;

        AuditLogService::new(self.db)
            .add_log(format!("Edited chant {}", id))
            .await;

        Ok(())
    }

    /// Deletes a chant.
    ///
    /// # Returns
    /// - `Ok(())` - Chant removed
    /// - `Err(AppError::NotFound)` - Unknown chant
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete_chant(&self, id: i32) -> Result<(), AppError> {
        if !ChantRepository::new(self.db).delete(id).await? {
            return Err(chant_not_found(id));
        }

        AuditLogService::new(self.db)
            .add_log(format!("Deleted chant {}", id))
            .await;

        Ok(())
    }

    /// Relates two active clubs, storing both directions atomically.
    ///
    /// # Returns
    /// - `Ok(())` - `first -> second` and `second -> first` stored
    /// - `Err(AppError::BadRequest)` - Self-relation, or either club unknown or soft-deleted
    /// - `Err(AppError::Conflict)` - Either direction already exists with this kind
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_relation(&self, key: ClubRelationKey) -> Result<(), AppError> {
        if key.first_club_id == key.second_club_id {
            return Err(AppError::BadRequest(
                "A club cannot be related to itself".to_string(),
            ));
        }

        let club_repo = ClubRepository::new(self.db);
        for club_id in [key.first_club_id, key.second_club_id] {
            if !club_repo.exists_active(club_id).await? {
                return Err(AppError::BadRequest(format!(
                    "Club with id {} does not exist",
                    club_id
                )));
            }
        }

        let relation_repo = ClubRelationRepository::new(self.db);
        if relation_repo.exists(key).await? || relation_repo.exists(key.reversed()).await? {
            return Err(AppError::Conflict(relation_exists(&key)));
        }

        relation_repo
            .create_pair(key)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, relation_exists(&key)))?;

        AuditLogService::new(self.db)
            .add_log(format!(
                "Added {} relation between clubs {} and {}",
                key.kind, key.first_club_id, key.second_club_id
            ))
            .await;

        Ok(())
    }

    /// Deletes one direction of a relation, addressed by its full key.
    ///
    /// # Returns
    /// - `Ok(())` - The row was removed; its mirror is kept
    /// - `Err(AppError::NotFound)` - No relation with that key
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete_relation(&self, key: ClubRelationKey) -> Result<(), AppError> {
        if !ClubRelationRepository::new(self.db).delete(key).await? {
            return Err(AppError::NotFound(format!(
                "No {} relation from club {} to club {}",
                key.kind, key.first_club_id, key.second_club_id
            )));
        }

        AuditLogService::new(self.db)
            .add_log(format!(
                "Deleted {} relation from club {} to club {}",
                key.kind, key.first_club_id, key.second_club_id
            ))
            .await;

        Ok(())
    }

    /// Deletes the first outgoing relation of a club.
    ///
    /// Kept for clients that address relations by a single club id. The relation
    /// with the lowest second club id, then the alphabetically first kind, is removed.
    ///
    /// # Returns
    /// - `Ok(ClubRelationKey)` - Key of the deleted relation
    /// - `Err(AppError::NotFound)` - The club has no outgoing relations
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete_relation_by_club(&self, club_id: i32) -> Result<ClubRelationKey, AppError> {
        let key = ClubRelationRepository::new(self.db)
            .get_first_outgoing(club_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Club with id {} has no relations", club_id))
            })?;

        self.delete_relation(key).await?;

        Ok(key)
    }

    /// Gets a club with its chants, fans and incoming relations.
    ///
    /// # Arguments
    /// - `id` - Club id
    /// - `include_deleted` - Return the club even if soft-deleted, and keep relations
    ///   to soft-deleted counterparts
    ///
    /// # Returns
    /// - `Ok(ClubDetails)` - Assembled club view
    /// - `Err(AppError::NotFound)` - No matching club
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_club(&self, id: i32, include_deleted: bool) -> Result<ClubDetails, AppError> {
        let club = ClubRepository::new(self.db)
            .get_by_id(id, include_deleted)
            .await?
            .ok_or_else(|| club_not_found(id))?;

        let mut details = self.load_details(vec![club], include_deleted).await?;

        details.pop().ok_or_else(|| club_not_found(id))
    }

    /// Gets a page of clubs ordered by id, each assembled like `get_club`.
    pub async fn get_clubs(&self, params: GetClubsParams) -> Result<Vec<ClubDetails>, AppError> {
        let clubs = ClubRepository::new(self.db).get_paginated(params).await?;

        self.load_details(clubs, params.include_deleted).await
    }

    /// Loads chants, fans and incoming relations for a batch of clubs.
    ///
    /// Issues one query per collection regardless of the number of clubs, then
    /// groups the rows by club id.
    async fn load_details(
        &self,
        clubs: Vec<Club>,
        include_deleted: bool,
    ) -> Result<Vec<ClubDetails>, AppError> {
        let club_ids: Vec<i32> = clubs.iter().map(|c| c.id).collect();

        let mut chants_by_club: HashMap<i32, Vec<Chant>> = HashMap::new();
        for chant in ChantRepository::new(self.db)
            .get_by_club_ids(club_ids.clone())
            .await?
        {
            chants_by_club.entry(chant.club_id).or_default().push(chant);
        }

        let mut fans_by_club: HashMap<i32, Vec<Fan>> = HashMap::new();
        for (club_id, fan) in MemberRepository::new(self.db)
            .get_fans_by_club_ids(club_ids.clone())
            .await?
        {
            fans_by_club.entry(club_id).or_default().push(fan);
        }

        let incoming = ClubRelationRepository::new(self.db)
            .get_incoming(club_ids)
            .await?;

        // Counterparts are fetched including soft-deleted clubs so a dangling id can
        // be told apart from a deleted club.
        let counterpart_ids: Vec<i32> = incoming.iter().map(|k| k.first_club_id).collect();
        let counterparts = ClubRepository::new(self.db)
            .get_by_ids(counterpart_ids, true)
            .await?;

        let mut relations_by_club: HashMap<i32, Vec<RelatedClub>> = HashMap::new();
        for key in incoming {
            let counterpart = counterparts.get(&key.first_club_id).ok_or_else(|| {
                AppError::InternalError(format!(
                    "Relation of club {} references missing club {}",
                    key.second_club_id, key.first_club_id
                ))
            })?;
            if counterpart.is_deleted && !include_deleted {
                continue;
            }

            relations_by_club
                .entry(key.second_club_id)
                .or_default()
                .push(RelatedClub {
                    club_id: counterpart.id,
                    club_name: counterpart.name.clone(),
                    kind: key.kind,
                });
        }

        Ok(clubs
            .into_iter()
            .map(|club| ClubDetails {
                chants: chants_by_club.remove(&club.id).unwrap_or_default(),
                relations: relations_by_club.remove(&club.id).unwrap_or_default(),
                fans: fans_by_club.remove(&club.id).unwrap_or_default(),
                club,
            })
            .collect())
    }
}

/// Rejects empty or whitespace-only text.
pub(crate) fn require_name(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(())
}

fn club_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Club with id {} not found", id))
}

fn chant_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Chant with id {} not found", id))
}

fn relation_exists(key: &ClubRelationKey) -> String {
    format!(
        "A {} relation between clubs {} and {} already exists",
        key.kind, key.first_club_id, key.second_club_id
    )
}

#[cfg(test)]
mod test;
