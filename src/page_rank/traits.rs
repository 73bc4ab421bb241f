use crate::RankTable;

pub trait PageRank {
    type Result: PageRankResult;

    fn calc(&mut self) -> crate::Result<Self::Result>;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &RankTable;
}
