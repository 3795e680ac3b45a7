use {
    crate::{
        error::{Error, Result},
        pipeline::Pipeline,
    },
    futures::future::join_all,
    std::sync::Arc,
    tokio::{
        sync::{mpsc, Mutex},
        task::JoinHandle,
    },
    tracing::{debug, error},
};

pub const DEFAULT_WORKERS: usize = 500;
pub const DEFAULT_QUEUE_SIZE: usize = 1000;

#[derive(Clone, Copy, Debug)]
pub struct PoolConfig {
    pub workers: usize,
    pub queue_size: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            queue_size: DEFAULT_QUEUE_SIZE,
        }
    }
}

/// Fixed-size fan-out over the input lines with a single output consumer.
///
/// Inputs go through a bounded work queue shared by every worker; formatted lines come
/// back through a bounded result queue drained by one task that hands them to the sink
/// in completion order. The result queue only closes once every worker has exited.
pub struct WorkerPool {
    work_tx: mpsc::Sender<String>,
    supervisor: JoinHandle<()>,
    output: JoinHandle<usize>,
}

impl WorkerPool {
    pub fn spawn<F>(config: PoolConfig, pipeline: Pipeline, mut sink: F) -> Self
    where
        F: FnMut(String) + Send + 'static,
    {
        let workers = config.workers.max(1);
        let queue_size = config.queue_size.max(1);

        let (work_tx, work_rx) = mpsc::channel::<String>(queue_size);
        let (result_tx, mut result_rx) = mpsc::channel::<String>(queue_size);
        let work_rx = Arc::new(Mutex::new(work_rx));

        let handles: Vec<JoinHandle<()>> = (0..workers)
            .map(|id| {
                let work_rx = Arc::clone(&work_rx);
                let result_tx = result_tx.clone();
                let pipeline = pipeline.clone();
                tokio::spawn(worker(id, work_rx, result_tx, pipeline))
            })
            .collect();

        // Only workers hold result senders from here on, so the queue closes after the
        // last one exits.
        drop(result_tx);

        let supervisor = tokio::spawn(async move {
            for joined in join_all(handles).await {
                if let Err(e) = joined {
                    error!("Worker task failed: {e}");
                }
            }
            debug!("All {workers} workers finished");
        });

        let output = tokio::spawn(async move {
            let mut emitted = 0;
            while let Some(line) = result_rx.recv().await {
                sink(line);
                emitted += 1;
            }
            emitted
        });

        Self {
            work_tx,
            supervisor,
            output,
        }
    }

    /// Queues one input, waiting while the work queue is full.
    pub async fn submit(&self, input: String) -> Result<()> {
        self.work_tx
            .send(input)
            .await
            .map_err(|_| Error::PoolClosed)
    }

    /// Closes the work queue, waits for every worker and for the output consumer to drain,
    /// and returns the number of lines emitted.
    pub async fn finish(self) -> Result<usize> {
        let Self {
            work_tx,
            supervisor,
            output,
        } = self;

        drop(work_tx);
        supervisor.await?;
        Ok(output.await?)
    }
}

async fn worker(
    id: usize,
    work_rx: Arc<Mutex<mpsc::Receiver<String>>>,
    result_tx: mpsc::Sender<String>,
    pipeline: Pipeline,
) {
    loop {
        // The lock is released before processing so other workers can pick up input.
        let next = work_rx.lock().await.recv().await;
        let Some(input) = next else {
            break;
        };

        let line = pipeline.process(&input).await;
        if result_tx.send(line).await.is_err() {
            error!("Result queue closed early, worker {id} is dropping output for {input}");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{cache::ResolutionCache, dnslib::Lookup, ranges::AddressRangeSet},
        async_trait::async_trait,
        std::{net::IpAddr, sync::Mutex as StdMutex, time::Duration},
    };

    struct Slow;

    #[async_trait]
    impl Lookup for Slow {
        async fn resolve(&self, hostname: &str) -> Vec<IpAddr> {
            tokio::time::sleep(Duration::from_millis(5)).await;
            if hostname.ends_with(".invalid") {
                Vec::new()
            } else {
                vec!["10.0.0.1".parse().unwrap()]
            }
        }
    }

    fn pipeline() -> Pipeline {
        Pipeline::new(
            Arc::new(ResolutionCache::new()),
            Arc::new(Slow),
            Arc::new(AddressRangeSet::default()),
        )
    }

    fn collecting_sink() -> (Arc<StdMutex<Vec<String>>>, impl FnMut(String) + Send + 'static) {
        let lines = Arc::new(StdMutex::new(Vec::new()));
        let sink_lines = Arc::clone(&lines);
        (lines, move |line| sink_lines.lock().unwrap().push(line))
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn every_input_is_emitted_once() {
        let (lines, sink) = collecting_sink();
        let config = PoolConfig {
            workers: 16,
            queue_size: 4,
        };
        let pool = WorkerPool::spawn(config, pipeline(), sink);

        for i in 0..200 {
            pool.submit(format!("host{i}.test")).await.unwrap();
        }
        let emitted = pool.finish().await.unwrap();

        let mut lines = lines.lock().unwrap().clone();
        assert_eq!(emitted, 200);
        assert_eq!(lines.len(), 200);
        lines.sort();
        lines.dedup();
        assert_eq!(lines.len(), 200);
    }

    #[tokio::test]
    async fn more_workers_than_inputs() {
        let (lines, sink) = collecting_sink();
        let pool = WorkerPool::spawn(PoolConfig::default(), pipeline(), sink);

        pool.submit("8.8.8.8".to_owned()).await.unwrap();
        pool.submit("nosuchhost.invalid".to_owned()).await.unwrap();

        assert_eq!(pool.finish().await.unwrap(), 2);
        let mut lines = lines.lock().unwrap().clone();
        lines.sort();
        assert_eq!(lines, ["8.8.8.8 : [8.8.8.8]", "nosuchhost.invalid : "]);
    }

    #[tokio::test]
    async fn empty_run_finishes() {
        let (lines, sink) = collecting_sink();
        let pool = WorkerPool::spawn(
            PoolConfig {
                workers: 1,
                queue_size: 1,
            },
            pipeline(),
            sink,
        );

        assert_eq!(pool.finish().await.unwrap(), 0);
        assert!(lines.lock().unwrap().is_empty());
    }
}
