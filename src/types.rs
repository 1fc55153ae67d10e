pub type GroupId = u32;
pub type NodeId = u32;
pub type StateId = u32;

pub type GroupList = smallvec::SmallVec<[GroupId; 4]>;
