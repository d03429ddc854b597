pub mod entities;
pub mod string_list;

pub use entities::{
    group_skills_by_category, Experience, PersonalInfo, Project, Skill, SkillGroup,
    PERSONAL_INFO_ID,
};
pub use string_list::{
    decode_string_list, deserialize_string_list, encode_string_list, normalize_string_list,
};
