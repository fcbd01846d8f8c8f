//! 预导入模块，方便使用

pub use super::classes::{ActiveModel as ClasseActiveModel, Entity as Classes, Model as ClasseModel};
pub use super::eleves::{ActiveModel as EleveActiveModel, Entity as Eleves, Model as EleveModel};
pub use super::professeurs::{
    ActiveModel as ProfesseurActiveModel, Entity as Professeurs, Model as ProfesseurModel,
};
