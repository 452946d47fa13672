mod memory;

pub type Store = memory::RegionCatalog;
