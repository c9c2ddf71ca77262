use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建管理员表
        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admins::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Admins::Username).string().not_null())
                    .col(
                        ColumnDef::new(Admins::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Admins::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Admins::Role).string().not_null())
                    .col(ColumnDef::new(Admins::Status).string().not_null())
                    .col(ColumnDef::new(Admins::ResetCodeHash).string().null())
                    .col(
                        ColumnDef::new(Admins::ResetCodeExpires)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Admins::ResetCodeAttempts)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Admins::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Admins::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生表（UUID 主键）
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Students::FullName).string().not_null())
                    .col(ColumnDef::new(Students::Phone).string().not_null())
                    .col(ColumnDef::new(Students::DateOfBirth).string().null())
                    .col(ColumnDef::new(Students::Address).text().null())
                    .col(ColumnDef::new(Students::ProfilePhoto).string().null())
                    .col(ColumnDef::new(Students::Status).string().not_null())
                    .col(ColumnDef::new(Students::OtpHash).string().null())
                    .col(ColumnDef::new(Students::OtpExpires).big_integer().null())
                    .col(ColumnDef::new(Students::ResetCodeHash).string().null())
                    .col(
                        ColumnDef::new(Students::ResetCodeExpires)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Students::ResetCodeAttempts)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Students::PasswordChangedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Students::LastLogin).big_integer().null())
                    .col(
                        ColumnDef::new(Students::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Teachers::FullName).string().not_null())
                    .col(ColumnDef::new(Teachers::Phone).string().not_null())
                    .col(
                        ColumnDef::new(Teachers::Specialization)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Teachers::Qualifications).text().not_null())
                    .col(ColumnDef::new(Teachers::LinkedinUrl).string().null())
                    .col(ColumnDef::new(Teachers::HourlyRate).double().null())
                    .col(ColumnDef::new(Teachers::Status).string().not_null())
                    .col(ColumnDef::new(Teachers::RejectionReason).text().null())
                    .col(ColumnDef::new(Teachers::CvPath).string().null())
                    .col(ColumnDef::new(Teachers::CertificatePaths).text().null())
                    .col(ColumnDef::new(Teachers::ProfilePhotoPath).string().null())
                    .col(ColumnDef::new(Teachers::ResetCodeHash).string().null())
                    .col(
                        ColumnDef::new(Teachers::ResetCodeExpires)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Teachers::ResetCodeAttempts)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Teachers::LastLogin).big_integer().null())
                    .col(
                        ColumnDef::new(Teachers::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Teachers::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建选择题表
        manager
            .create_table(
                Table::create()
                    .table(Mcqs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Mcqs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Mcqs::Question).text().not_null())
                    .col(ColumnDef::new(Mcqs::Options).text().not_null())
                    .col(ColumnDef::new(Mcqs::CorrectAnswer).integer().not_null())
                    .col(ColumnDef::new(Mcqs::Category).string().null())
                    .col(ColumnDef::new(Mcqs::Difficulty).string().not_null())
                    .col(ColumnDef::new(Mcqs::Explanation).text().null())
                    .col(ColumnDef::new(Mcqs::CreatedBy).big_integer().not_null())
                    .col(ColumnDef::new(Mcqs::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Mcqs::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Mcqs::Table, Mcqs::CreatedBy)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建题目表
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Questions::Title).string().not_null())
                    .col(ColumnDef::new(Questions::Content).text().not_null())
                    .col(ColumnDef::new(Questions::QuestionType).string().not_null())
                    .col(ColumnDef::new(Questions::Number).integer().not_null())
                    .col(ColumnDef::new(Questions::Tags).text().null())
                    .col(ColumnDef::new(Questions::Author).big_integer().not_null())
                    .col(
                        ColumnDef::new(Questions::Views)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Questions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Questions::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Questions::Table, Questions::Author)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Mcqs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Admins {
    #[sea_orm(iden = "admins")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    ResetCodeHash,
    ResetCodeExpires,
    ResetCodeAttempts,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Email,
    PasswordHash,
    FullName,
    Phone,
    DateOfBirth,
    Address,
    ProfilePhoto,
    Status,
    OtpHash,
    OtpExpires,
    ResetCodeHash,
    ResetCodeExpires,
    ResetCodeAttempts,
    PasswordChangedAt,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    Email,
    PasswordHash,
    FullName,
    Phone,
    Specialization,
    Qualifications,
    LinkedinUrl,
    HourlyRate,
    Status,
    RejectionReason,
    CvPath,
    CertificatePaths,
    ProfilePhotoPath,
    ResetCodeHash,
    ResetCodeExpires,
    ResetCodeAttempts,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Mcqs {
    #[sea_orm(iden = "mcqs")]
    Table,
    Id,
    Question,
    Options,
    CorrectAnswer,
    Category,
    Difficulty,
    Explanation,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Questions {
    #[sea_orm(iden = "questions")]
    Table,
    Id,
    Title,
    Content,
    QuestionType,
    Number,
    Tags,
    Author,
    Views,
    CreatedAt,
    UpdatedAt,
}
