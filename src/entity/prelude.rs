//! 预导入模块，方便使用

pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades};
pub use super::students::{ActiveModel as StudentActiveModel, Entity as Students};
pub use super::teachers::{ActiveModel as TeacherActiveModel, Entity as Teachers};
