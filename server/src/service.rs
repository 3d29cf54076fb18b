use std::sync::Arc;

use spellingbee::{Dictionary, Ranking};
use tonic::{Request, Response, Status};
use tracing::debug;

use crate::proto::spellingbee_server::Spellingbee;
use crate::proto::{SpellingbeeReply, SpellingbeeRequest, StatsReply, StatsRequest};
use crate::stats::ServerStats;

pub struct SpellingbeeService {
    dict: Arc<Dictionary>,
    stats: Arc<ServerStats>,
}

impl SpellingbeeService {
    pub fn new(dict: Arc<Dictionary>, stats: Arc<ServerStats>) -> Self {
        SpellingbeeService { dict, stats }
    }
}

#[tonic::async_trait]
impl Spellingbee for SpellingbeeService {
    async fn find_words(
        &self,
        request: Request<SpellingbeeRequest>,
    ) -> Result<Response<SpellingbeeReply>, Status> {
        let SpellingbeeRequest { letters, reverse } = request.into_inner();
        self.stats.record_solve();

        let mut soln = self.dict.find_words(&letters);
        Ranking::new(&letters, reverse).sort(&mut soln);
        debug!(letters, reverse, words = soln.len(), "find_words");

        Ok(Response::new(SpellingbeeReply {
            words: soln.into_iter().map(str::to_owned).collect(),
        }))
    }

    async fn stats(
        &self,
        _request: Request<StatsRequest>,
    ) -> Result<Response<StatsReply>, Status> {
        Ok(Response::new(StatsReply {
            dict_size: self.stats.dict_size(),
            solves: self.stats.solves(),
            solutions: self.stats.solutions().into_iter().collect(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const WORDS: [&str; 7] = [
        "lime", "mingling", "melding", "meddling", "glide", "alpha", "phalanx",
    ];

    fn service() -> SpellingbeeService {
        let stats = Arc::new(ServerStats::default());
        let dict = Arc::new(Dictionary::with_stats(WORDS, stats.clone()));
        SpellingbeeService::new(dict, stats)
    }

    async fn solve(svc: &SpellingbeeService, letters: &str, reverse: bool) -> Vec<String> {
        let request = Request::new(SpellingbeeRequest {
            letters: letters.to_owned(),
            reverse,
        });
        svc.find_words(request).await.unwrap().into_inner().words
    }

    #[tokio::test]
    async fn ranked_solutions() {
        let svc = service();
        assert_eq!(
            solve(&svc, "mdegiln", false).await,
            ["lime", "mingling", "melding", "meddling"]
        );
        assert_eq!(
            solve(&svc, "mdegiln", true).await,
            ["meddling", "melding", "mingling", "lime"]
        );
    }

    #[tokio::test]
    async fn empty_letters() {
        let svc = service();
        assert!(solve(&svc, "", false).await.is_empty());
        assert!(solve(&svc, "a1", false).await.is_empty());
    }

    #[tokio::test]
    async fn stats_reply() {
        let svc = service();
        solve(&svc, "mdegiln", false).await;
        solve(&svc, "alphynx", true).await;
        solve(&svc, "", false).await;

        let reply = svc
            .stats(Request::new(StatsRequest {}))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(reply.dict_size, 6);
        assert_eq!(reply.solves, 3);
        assert_eq!(reply.solutions, HashMap::from([(4, 1), (2, 1), (0, 1)]));
    }
}
