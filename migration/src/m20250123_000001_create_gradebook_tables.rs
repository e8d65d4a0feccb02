use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Professores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professores::Nome).string_len(150).not_null())
                    .col(
                        ColumnDef::new(Professores::Email)
                            .string_len(150)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Professores::SenhaHash)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Turmas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Turmas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Turmas::NomeTurma).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Turmas::CodigoTurma)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Turmas::ProfessorId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Turmas::Table, Turmas::ProfessorId)
                            .to(Professores::Table, Professores::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Alunos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alunos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alunos::NomeAluno).string_len(150).not_null())
                    .col(ColumnDef::new(Alunos::TurmaId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alunos::Table, Alunos::TurmaId)
                            .to(Turmas::Table, Turmas::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩表
        manager
            .create_table(
                Table::create()
                    .table(Notas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Notas::AvaliacaoNome)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Notas::ValorNota).double().not_null())
                    .col(ColumnDef::new(Notas::AlunoId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notas::Table, Notas::AlunoId)
                            .to(Alunos::Table, Alunos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 外键索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_turmas_professor_id")
                    .table(Turmas::Table)
                    .col(Turmas::ProfessorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_alunos_turma_id")
                    .table(Alunos::Table)
                    .col(Alunos::TurmaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_notas_aluno_id")
                    .table(Notas::Table)
                    .col(Notas::AlunoId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Notas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Alunos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Turmas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professores::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Professores {
    #[sea_orm(iden = "professores")]
    Table,
    Id,
    Nome,
    Email,
    SenhaHash,
}

#[derive(DeriveIden)]
enum Turmas {
    #[sea_orm(iden = "turmas")]
    Table,
    Id,
    NomeTurma,
    CodigoTurma,
    ProfessorId,
}

#[derive(DeriveIden)]
enum Alunos {
    #[sea_orm(iden = "alunos")]
    Table,
    Id,
    NomeAluno,
    TurmaId,
}

#[derive(DeriveIden)]
enum Notas {
    #[sea_orm(iden = "notas")]
    Table,
    Id,
    AvaliacaoNome,
    ValorNota,
    AlunoId,
}
