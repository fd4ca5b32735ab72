//! Laptop gRPC service implementation
//!
//! `LaptopServiceImpl` adapts the four RPC shapes onto [`CatalogService`]. Every call gets
//! its own [`CallContext`]; streaming work runs in spawned tasks that feed an `mpsc`
//! channel exposed to tonic as a `ReceiverStream`.

use std::pin::Pin;

use domain_laptops::{
    CallContext, CatalogError, CatalogResult, CatalogService, Filter, Laptop, LaptopStore,
    RatingStore, StoredImage,
};
use grpc_client::{ToTonicOption, ToTonicResult};
use rpc::laptop::{
    CreateLaptopRequest, CreateLaptopResponse, RateLaptopRequest, RateLaptopResponse,
    SearchLaptopRequest, SearchLaptopResponse, UploadImageRequest, UploadImageResponse,
    laptop_service_server::LaptopService, upload_image_request::Data,
};
use tokio::sync::mpsc;
use tokio_stream::{Stream, StreamExt};
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Code, Request, Response, Status, Streaming};
use tracing::{debug, info, warn};

type ResponseStream<T> = Pin<Box<dyn Stream<Item = Result<T, Status>> + Send>>;

/// Outbound messages buffered per streaming call.
const STREAM_BUFFER: usize = 16;

/// gRPC service implementation for the laptop catalog
///
/// Generic over the stores for testability.
pub struct LaptopServiceImpl<S, R>
where
    S: LaptopStore + 'static,
    R: RatingStore + 'static,
{
    service: CatalogService<S, R>,
}

impl<S, R> LaptopServiceImpl<S, R>
where
    S: LaptopStore + 'static,
    R: RatingStore + 'static,
{
    pub fn new(service: CatalogService<S, R>) -> Self {
        Self { service }
    }

    pub fn catalog(&self) -> &CatalogService<S, R> {
        &self.service
    }

    /// Metadata first, then chunks until the client half-closes.
    async fn receive_image<I>(&self, ctx: &CallContext, stream: &mut I) -> CatalogResult<StoredImage>
    where
        I: Stream<Item = Result<UploadImageRequest, Status>> + Unpin,
    {
        let info = match next_message(ctx, stream).await? {
            Some(UploadImageRequest {
                data: Some(Data::Info(info)),
            }) => info,
            Some(_) => return Err(CatalogError::invalid("first message must carry image info")),
            None => return Err(CatalogError::invalid("image info is required")),
        };
        info!(laptop_id = %info.laptop_id, image_type = %info.image_type, "receive an upload-image request");

        let mut session = self
            .service
            .begin_upload(&info.laptop_id, &info.image_type)
            .await?;

        while let Some(message) = next_message(ctx, stream).await? {
            match message.data {
                Some(Data::ChunkData(chunk)) => {
                    session.push_chunk(&chunk)?;
                }
                Some(Data::Info(_)) => {
                    session.abort();
                    return Err(CatalogError::invalid("image info must be sent only once"));
                }
                None => {
                    session.abort();
                    return Err(CatalogError::invalid("upload message carries no data"));
                }
            }
        }

        self.service.finish_upload(ctx, session).await
    }
}

/// Receive the next inbound message, honouring cancellation and the deadline.
async fn next_message<T, I>(ctx: &CallContext, stream: &mut I) -> CatalogResult<Option<T>>
where
    I: Stream<Item = Result<T, Status>> + Unpin,
{
    ctx.guard(stream.next())
        .await?
        .transpose()
        .map_err(|status| match status.code() {
            Code::Cancelled => CatalogError::Cancelled,
            Code::DeadlineExceeded => CatalogError::DeadlineExceeded,
            _ => CatalogError::Unknown(format!("cannot receive message: {}", status.message())),
        })
}

/// Queue one outbound message, failing with `Internal` once the caller is gone.
async fn send_message<T>(
    ctx: &CallContext,
    tx: &mpsc::Sender<Result<T, Status>>,
    message: T,
) -> CatalogResult<()> {
    ctx.guard(tx.send(Ok(message)))
        .await?
        .map_err(|_| CatalogError::internal("cannot send response to the caller"))
}

/// Cancel `ctx` as soon as the receiving half of `tx` is dropped.
fn cancel_on_disconnect<T: Send + 'static>(
    ctx: &CallContext,
    tx: &mpsc::Sender<T>,
) -> tokio::task::JoinHandle<()> {
    let ctx = ctx.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        tx.closed().await;
        ctx.cancel();
    })
}

#[tonic::async_trait]
impl<S, R> LaptopService for LaptopServiceImpl<S, R>
where
    S: LaptopStore + 'static,
    R: RatingStore + 'static,
{
    async fn create_laptop(
        &self,
        request: Request<CreateLaptopRequest>,
    ) -> Result<Response<CreateLaptopResponse>, Status> {
        let ctx = CallContext::from_metadata(request.metadata());
        let laptop: Laptop = request
            .into_inner()
            .laptop
            .ok_or_invalid("laptop is required")?
            .try_into()
            .to_tonic()?;
        info!(laptop_id = %laptop.id, "receive a create-laptop request");

        let id = self.service.create_laptop(&ctx, laptop).await?;
        Ok(Response::new(CreateLaptopResponse { id }))
    }

    type SearchLaptopStream = ResponseStream<SearchLaptopResponse>;

    async fn search_laptop(
        &self,
        request: Request<SearchLaptopRequest>,
    ) -> Result<Response<Self::SearchLaptopStream>, Status> {
        let ctx = CallContext::from_metadata(request.metadata());
        let filter: Filter = match request.into_inner().filter {
            Some(filter) => filter.try_into().to_tonic()?,
            None => Filter::default(),
        };
        info!(?filter, "receive a search-laptop request");

        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        let service = self.service.clone();

        tokio::spawn(async move {
            let watcher = cancel_on_disconnect(&ctx, &tx);

            let result = service
                .search_laptops(&ctx, &filter, |laptop| {
                    let ctx = ctx.clone();
                    let tx = tx.clone();
                    async move {
                        debug!(laptop_id = %laptop.id, "found laptop");
                        let response = SearchLaptopResponse {
                            laptop: Some(laptop.into()),
                        };
                        send_message(&ctx, &tx, response).await
                    }
                })
                .await;
            watcher.abort();

            if let Err(err) = result {
                warn!(error = %err, "search-laptop failed");
                let _ = tx.send(Err(err.into())).await;
            }
        });

        Ok(Response::new(Box::pin(ReceiverStream::new(rx))))
    }

    async fn upload_image(
        &self,
        request: Request<Streaming<UploadImageRequest>>,
    ) -> Result<Response<UploadImageResponse>, Status> {
        let ctx = CallContext::from_metadata(request.metadata());
        let mut stream = request.into_inner();

        let stored = self.receive_image(&ctx, &mut stream).await.map_err(|err| {
            warn!(error = %err, "upload-image failed");
            Status::from(err)
        })?;
        let size = u32::try_from(stored.size)
            .map_err(|_| Status::internal(format!("image size {} does not fit the response", stored.size)))?;

        info!(image_id = %stored.id, size, "image uploaded");
        Ok(Response::new(UploadImageResponse {
            id: stored.id,
            size,
        }))
    }

    type RateLaptopStream = ResponseStream<RateLaptopResponse>;

    async fn rate_laptop(
        &self,
        request: Request<Streaming<RateLaptopRequest>>,
    ) -> Result<Response<Self::RateLaptopStream>, Status> {
        let ctx = CallContext::from_metadata(request.metadata());
        let mut inbound = request.into_inner();

        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        let service = self.service.clone();
        let consumer_ctx = ctx.clone();
        let consumer_tx = tx.clone();

        let consumer = tokio::spawn(async move {
            while let Some(message) = next_message(&consumer_ctx, &mut inbound).await? {
                debug!(laptop_id = %message.laptop_id, score = message.score, "receive a rate-laptop request");

                let rating = service.rate_laptop(&message.laptop_id, message.score).await?;
                let response = RateLaptopResponse {
                    laptop_id: message.laptop_id,
                    rated_count: rating.count,
                    average_score: rating.average(),
                };
                send_message(&consumer_ctx, &consumer_tx, response).await?;
            }
            Ok::<(), CatalogError>(())
        });

        tokio::spawn(async move {
            let outcome = match consumer.await {
                Ok(result) => result,
                Err(join_error) => Err(CatalogError::internal(format!("rating task failed: {join_error}"))),
            };

            match outcome {
                Ok(()) => debug!("rate-laptop stream finished"),
                Err(err) => {
                    warn!(error = %err, "rate-laptop failed");
                    ctx.cancel();
                    let _ = tx.send(Err(err.into())).await;
                }
            }
        });

        Ok(Response::new(Box::pin(ReceiverStream::new(rx))))
    }
}
