//! Course category and technology domain models.

use crate::model::category::{CategoryDto, CreateCategoryDto, TechnologyDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn from_entity(entity: entity::course_category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description.unwrap_or_default(),
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Parameters for creating or renaming a category.
#[derive(Debug, Clone)]
pub struct CategoryParams {
    pub name: String,
    pub description: String,
}

impl CategoryParams {
    /// Stored description, `None` when blank.
    pub fn stored_description(&self) -> Option<String> {
        (!self.description.is_empty()).then(|| self.description.clone())
    }

    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Technology {
    pub id: i32,
    pub name: String,
}

impl Technology {
    pub fn from_entity(entity: entity::technology::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> TechnologyDto {
        TechnologyDto {
            id: self.id,
            name: self.name,
        }
    }
}
