use crate::model::member::{CreateMemberDto, MemberDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub club_id: Option<i32>,
}

impl Member {
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            club_id: entity.club_id,
        }
    }
}

/// A member with the name of the club they currently support, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDetails {
    pub member: Member,
    pub club_name: Option<String>,
}

impl MemberDetails {
    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.member.id,
            name: self.member.name,
            club_id: self.member.club_id,
            club_name: self.club_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMemberParams {
    pub name: String,
    pub club_id: Option<i32>,
}

impl CreateMemberParams {
    pub fn from_dto(dto: CreateMemberDto) -> Self {
        Self {
            name: dto.name,
            club_id: dto.club_id,
        }
    }
}
