//! Intent 模块 - 实体 CRUD 意图
//!
//! Roster entities (members, teams, events) are only ever changed through
//! these intents, which the engine turns into exactly one backend request.

use serde::{Deserialize, Serialize};

use crate::models::{EventCreate, EventUpdate, MemberCreate, MemberUpdate, TeamCreate, TeamUpdate};

/// 通用 CRUD 操作
///
/// 泛型参数：
/// - `C`: Create 数据类型
/// - `U`: Update 数据类型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CrudAction<C, U> {
    /// 创建
    Create(C),
    /// 更新 (需要 ID 和数据)
    Update { id: String, data: U },
    /// 删除 (只需要 ID)
    Delete { id: String },
}

impl<C, U> CrudAction<C, U> {
    /// Verb used in notices and log lines
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Self::Delete { .. })
    }
}

/// 实体意图 - 所有管理操作的统一入口
///
/// ```json
/// {
///   "model": "Member",
///   "action": { "type": "Create", "data": { "name": "Anna", "team": "Sales" } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", content = "action")]
pub enum EntityIntent {
    /// 人员
    Member(CrudAction<MemberCreate, MemberUpdate>),
    /// 部门
    Team(CrudAction<TeamCreate, TeamUpdate>),
    /// 事件
    Event(CrudAction<EventCreate, EventUpdate>),
}

impl EntityIntent {
    /// Model name ("member", "team", "event")
    pub fn model(&self) -> &'static str {
        match self {
            Self::Member(_) => "member",
            Self::Team(_) => "team",
            Self::Event(_) => "event",
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Self::Member(a) => a.verb(),
            Self::Team(a) => a.verb(),
            Self::Event(a) => a.verb(),
        }
    }

    pub fn is_delete(&self) -> bool {
        match self {
            Self::Member(a) => a.is_delete(),
            Self::Team(a) => a.is_delete(),
            Self::Event(a) => a.is_delete(),
        }
    }
}
