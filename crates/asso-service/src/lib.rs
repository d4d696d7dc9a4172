//! # asso-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::requests::{
    AdminLoginRequest, ContactMessageRequest, CreateEventRequest, CreateLookupRequest,
    CreatePublicationRequest, RegisterParticipantRequest, UpdateEventRequest,
    UpdatePublicationRequest, UpdateSupportInfoRequest,
};
pub use dto::responses::{
    AdminAuthResponse, AdminLogResponse, ApiResponse, ContactMessageResponse, EventResponse,
    HealthResponse, LookupResponse, MediaResponse, ParticipantResponse, PublicationResponse,
    ReadinessResponse, SupportInfoResponse, UploadedMediaResponse,
};
pub use services::{
    AdminLogService, AuthService, ContactMessageService, EventService, LookupService,
    MediaService, PublicationService, RegistrationService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, SupportInfoService,
};
