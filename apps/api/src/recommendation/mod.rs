// Quiz → career recommendations. One upstream search per submission, then a
// deterministic rank over fixed preferred titles and the search hits.

pub mod filter;
pub mod handlers;
pub mod lookup;
