//! Fan membership.
//!
//! A member supports at most one club at a time; joining another club replaces
//! the current affiliation.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{club::ClubRepository, member::MemberRepository},
    error::AppError,
    model::member::{CreateMemberParams, Member, MemberDetails},
    service::{audit_log::AuditLogService, club::require_name},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a member, optionally as a fan of an active club.
    ///
    /// # Returns
    /// - `Ok(MemberDetails)` - The created member
    /// - `Err(AppError::BadRequest)` - Blank name, or the club is unknown or soft-deleted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_member(&self, params: CreateMemberParams) -> Result<MemberDetails, AppError> {
        require_name(&params.name, "Member name")?;
        if let Some(club_id) = params.club_id {
            self.require_active_club(club_id).await?;
        }

        let member = MemberRepository::new(self.db).create(params).await?;

        AuditLogService::new(self.db)
            .add_log(format!("Added member {}", member.id))
            .await;

        self.with_club_name(member).await
    }

    /// Moves a member to another club, or out of any club with `None`.
    ///
    /// # Returns
    /// - `Ok(())` - Affiliation replaced
    /// - `Err(AppError::NotFound)` - Unknown member
    /// - `Err(AppError::BadRequest)` - The club is unknown or soft-deleted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_member_club(&self, id: i32, club_id: Option<i32>) -> Result<(), AppError> {
        let member_repo = MemberRepository::new(self.db);
        if member_repo.get_by_id(id).await?.is_none() {
            return Err(member_not_found(id));
        }
        if let Some(club_id) = club_id {
            self.require_active_club(club_id).await?;
        }

        member_repo
            .set_club(id, club_id)
            .await?
            .ok_or_else(|| member_not_found(id))?;

        let message = match club_id {
            Some(club_id) => format!("Member {} joined club {}", id, club_id),
            None => format!("Member {} left their club", id),
        };
        AuditLogService::new(self.db).add_log(message).await;

        Ok(())
    }

    /// Gets a member with the name of the club they support.
    ///
    /// # Returns
    /// - `Ok(MemberDetails)` - The member
    /// - `Err(AppError::NotFound)` - Unknown member
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_member(&self, id: i32) -> Result<MemberDetails, AppError> {
        let member = MemberRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| member_not_found(id))?;

        self.with_club_name(member).await
    }

    async fn require_active_club(&self, club_id: i32) -> Result<(), AppError> {
        if !ClubRepository::new(self.db).exists_active(club_id).await? {
            return Err(AppError::BadRequest(format!(
                "Club with id {} does not exist",
                club_id
            )));
        }

        Ok(())
    }

    async fn with_club_name(&self, member: Member) -> Result<MemberDetails, AppError> {
        let club_name = match member.club_id {
            Some(club_id) => ClubRepository::new(self.db)
                .get_by_id(club_id, true)
                .await?
                .map(|club| club.name),
            None => None,
        };

        Ok(MemberDetails { member, club_name })
    }
}

fn member_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Member with id {} not found", id))
}

#[cfg(test)]
mod test;
